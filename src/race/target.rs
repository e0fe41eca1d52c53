//! Per-attempt rebinding targets.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::config::DNS_SUBDOMAIN_LENGTH;

/// Identity of one race attempt.
///
/// A fresh label is generated for every attempt so that neither the victim's
/// resolver cache nor the authoritative record state carries over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebindTarget {
    label: String,
    host: String,
}

impl RebindTarget {
    /// Generates a target with a random alphanumeric label under `zone_suffix`.
    pub fn generate(zone_suffix: &str) -> Self {
        Self::from_label(random_label(DNS_SUBDOMAIN_LENGTH), zone_suffix)
    }

    /// `zone_suffix` may be given with or without its leading dot.
    pub fn from_label(label: impl Into<String>, zone_suffix: &str) -> Self {
        let label = label.into();
        let host = format!("{label}.{}", zone_suffix.trim_start_matches('.'));
        Self { label, host }
    }

    /// Subdomain label, the key the DNS control plane uses.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fully qualified host used in fetch URLs.
    pub fn host(&self) -> &str {
        &self.host
    }
}

fn random_label(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_label_shape() {
        let target = RebindTarget::generate(".dns.example");
        assert_eq!(target.label().len(), 12);
        assert!(target.label().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(target.host(), format!("{}.dns.example", target.label()));
    }

    #[test]
    fn test_generated_labels_differ() {
        let a = RebindTarget::generate(".dns.example");
        let b = RebindTarget::generate(".dns.example");
        assert_ne!(a.label(), b.label());
    }

    #[test]
    fn test_from_label() {
        let target = RebindTarget::from_label("abc123def456", ".dns.pointer.pw");
        assert_eq!(target.label(), "abc123def456");
        assert_eq!(target.host(), "abc123def456.dns.pointer.pw");
    }

    #[test]
    fn test_suffix_without_leading_dot() {
        let target = RebindTarget::from_label("abc123def456", "dns.pointer.pw");
        assert_eq!(target.host(), "abc123def456.dns.pointer.pw");
        assert_eq!(target.label(), "abc123def456");
    }
}
