//! Turning operator references into stable entry ids

use crate::error::{MoodjError, Result};
use std::str::FromStr;
use uuid::Uuid;

/// How the operator pointed at an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTarget {
    /// 1-based index into the list last shown
    Position(usize),
    Id(Uuid),
}

impl FromStr for EntryTarget {
    type Err = MoodjError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('#');
        if let Ok(position) = trimmed.parse::<usize>() {
            return Ok(EntryTarget::Position(position));
        }
        Uuid::parse_str(trimmed)
            .map(EntryTarget::Id)
            .map_err(|_| MoodjError::InvalidTarget(s.trim().to_string()))
    }
}

impl EntryTarget {
    /// Resolve against the ids of the list the operator was shown, in
    /// display order. Positions outside that list are rejected, never clamped.
    pub fn resolve(&self, shown: &[Uuid]) -> Result<Uuid> {
        match *self {
            EntryTarget::Id(id) => Ok(id),
            EntryTarget::Position(position) => position
                .checked_sub(1)
                .and_then(|index| shown.get(index))
                .copied()
                .ok_or(MoodjError::PositionOutOfRange {
                    position,
                    count: shown.len(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_and_id() {
        assert_eq!(
            "3".parse::<EntryTarget>().unwrap(),
            EntryTarget::Position(3)
        );
        assert_eq!(
            " #2 ".parse::<EntryTarget>().unwrap(),
            EntryTarget::Position(2)
        );
        let id = Uuid::new_v4();
        assert_eq!(
            id.to_string().parse::<EntryTarget>().unwrap(),
            EntryTarget::Id(id)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            "third".parse::<EntryTarget>(),
            Err(MoodjError::InvalidTarget(s)) if s == "third"
        ));
        assert!("-1".parse::<EntryTarget>().is_err());
    }

    #[test]
    fn test_resolve_position() {
        let shown = vec![Uuid::new_v4(), Uuid::new_v4()];
        assert_eq!(EntryTarget::Position(1).resolve(&shown).unwrap(), shown[0]);
        assert_eq!(EntryTarget::Position(2).resolve(&shown).unwrap(), shown[1]);
    }

    #[test]
    fn test_resolve_stale_position_rejected() {
        let shown = vec![Uuid::new_v4()];
        assert!(matches!(
            EntryTarget::Position(2).resolve(&shown),
            Err(MoodjError::PositionOutOfRange {
                position: 2,
                count: 1
            })
        ));
        assert!(EntryTarget::Position(0).resolve(&shown).is_err());
        assert!(EntryTarget::Position(1).resolve(&[]).is_err());
    }
}
