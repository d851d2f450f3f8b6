//! Neighborhood operator kinds.

use std::fmt;
use std::str::FromStr;

use super::operators;
use crate::error::ConfigError;
use crate::sequence::Sequence;

/// A structural move defining a neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborhoodKind {
    /// Swap two adjacent jobs.
    Transpose,
    /// Swap any two jobs.
    Exchange,
    /// Relocate one job to a later position.
    Insert,
}

impl NeighborhoodKind {
    pub const ALL: [NeighborhoodKind; 3] = [Self::Transpose, Self::Exchange, Self::Insert];

    /// Transpose, then exchange, then insert.
    pub const TEI: [NeighborhoodKind; 3] = [Self::Transpose, Self::Exchange, Self::Insert];

    /// Transpose, then insert, then exchange.
    pub const TIE: [NeighborhoodKind; 3] = [Self::Transpose, Self::Insert, Self::Exchange];

    /// Generates the full candidate set for `sequence`.
    pub fn generate(self, sequence: &Sequence) -> Vec<Sequence> {
        match self {
            Self::Transpose => operators::transpose(sequence),
            Self::Exchange => operators::exchange(sequence),
            Self::Insert => operators::insert(sequence),
        }
    }

    /// Number of candidates [`generate`](Self::generate) yields for `n` jobs.
    pub fn size(self, n: usize) -> usize {
        match self {
            Self::Transpose => n.saturating_sub(1),
            Self::Exchange | Self::Insert => operators::pair_count(n),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transpose => "TRANSPOSE",
            Self::Exchange => "EXCHANGE",
            Self::Insert => "INSERT",
        }
    }

    /// Parses a neighborhood order.
    ///
    /// Accepts a single operator label, one of the composite labels `TEI`
    /// and `TIE`, or a comma-separated list of operator labels.
    pub fn parse_order(s: &str) -> Result<Vec<NeighborhoodKind>, ConfigError> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("TEI") {
            return Ok(Self::TEI.to_vec());
        }
        if trimmed.eq_ignore_ascii_case("TIE") {
            return Ok(Self::TIE.to_vec());
        }
        let order = trimmed
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.parse::<NeighborhoodKind>())
            .collect::<Result<Vec<_>, ConfigError>>()?;
        if order.is_empty() {
            return Err(ConfigError::EmptyNeighborhoodOrder);
        }
        Ok(order)
    }
}

impl fmt::Display for NeighborhoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeighborhoodKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRANSPOSE" => Ok(Self::Transpose),
            "EXCHANGE" => Ok(Self::Exchange),
            "INSERT" => Ok(Self::Insert),
            _ => Err(ConfigError::Unsupported {
                option: "neighborhood",
                value: s.to_string(),
                expected: "TRANSPOSE, EXCHANGE, INSERT",
            }),
        }
    }
}

/// Renders an order as its label, e.g. `TEI` or `TRANSPOSE,INSERT`.
pub fn order_label(order: &[NeighborhoodKind]) -> String {
    if order == NeighborhoodKind::TEI {
        return "TEI".into();
    }
    if order == NeighborhoodKind::TIE {
        return "TIE".into();
    }
    order
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for kind in NeighborhoodKind::ALL {
            assert_eq!(kind.as_str().parse::<NeighborhoodKind>(), Ok(kind));
        }
        assert_eq!("insert".parse::<NeighborhoodKind>(), Ok(NeighborhoodKind::Insert));
    }

    #[test]
    fn test_unknown_label() {
        let err = "SHIFT".parse::<NeighborhoodKind>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Unsupported {
                option: "neighborhood",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(
            NeighborhoodKind::parse_order("TIE").unwrap(),
            NeighborhoodKind::TIE.to_vec()
        );
        assert_eq!(
            NeighborhoodKind::parse_order("exchange").unwrap(),
            vec![NeighborhoodKind::Exchange]
        );
        assert_eq!(
            NeighborhoodKind::parse_order("INSERT, TRANSPOSE").unwrap(),
            vec![NeighborhoodKind::Insert, NeighborhoodKind::Transpose]
        );
        assert_eq!(
            NeighborhoodKind::parse_order(" "),
            Err(ConfigError::EmptyNeighborhoodOrder)
        );
    }

    #[test]
    fn test_order_label() {
        assert_eq!(order_label(&NeighborhoodKind::TEI), "TEI");
        assert_eq!(order_label(&[NeighborhoodKind::Insert]), "INSERT");
    }

    #[test]
    fn test_generate_matches_size() {
        let seq = Sequence::identity(7);
        for kind in NeighborhoodKind::ALL {
            assert_eq!(kind.generate(&seq).len(), kind.size(7));
        }
    }
}
