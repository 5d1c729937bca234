use bevy_ecs::prelude::Component;

/// Tag component naming the gameplay group an entity belongs to.
///
/// Systems filter on the group name to pick out players, platforms, props and
/// so on without introducing one marker type per role.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
