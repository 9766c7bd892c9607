//! Instructor employment status.

use fitlink_core::traits::Lifecycle;

db_enum! {
    /// Whether an instructor is bookable at all (see also `is_available`).
    pub enum InstructorStatus as "instructor_status" {
        Active => "active",
        Inactive => "inactive",
        Suspended => "suspended",
    }
}

impl Lifecycle for InstructorStatus {
    const ENTITY: &'static str = "instructor";

    fn allowed_transitions(&self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Inactive, Self::Suspended],
            Self::Inactive => &[Self::Active, Self::Suspended],
            Self::Suspended => &[Self::Active, Self::Inactive],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_self_transition() {
        for status in InstructorStatus::ALL {
            assert!(!status.can_transition_to(*status));
            assert!(!status.is_terminal());
        }
    }
}
