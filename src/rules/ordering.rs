//! Using-directive ordering comparator.
//!
//! Directives fall into three disjoint buckets. An ordering rule governs one
//! bucket and compares each governed directive against the nearest earlier
//! governed directive of the same scope; directives of other buckets are
//! passed over without resetting that cursor. Keys compare ordinally.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::parser::{UsingDirective, UsingScope};

/// The kind of a using directive for ordering purposes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UsingBucket {
    /// `using System.Text;`
    Namespace,
    /// `using static System.Math;`
    Static,
    /// `using Alias = System.Action;` (also when combined with `static`)
    Alias,
}

impl UsingBucket {
    /// Classify a directive. Directives with neither a target nor an alias
    /// are malformed and belong to no bucket.
    pub fn of(directive: &UsingDirective) -> Option<Self> {
        if directive.alias().is_some() {
            Some(UsingBucket::Alias)
        } else if directive.target_name().is_none() {
            None
        } else if directive.is_static() {
            Some(UsingBucket::Static)
        } else {
            Some(UsingBucket::Namespace)
        }
    }
}

/// What a governed directive is sorted by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderKey {
    /// The right-hand target name, `global::` stripped
    Target,
    /// The alias identifier of `using Alias = ...`
    #[default]
    AliasName,
}

/// One detected inversion: `later` sorts before `earlier`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inversion {
    pub earlier: UsingDirective,
    pub earlier_key: SmolStr,
    pub later: UsingDirective,
    pub later_key: SmolStr,
}

/// Bucket and key a rule orders by
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsingOrdering {
    pub bucket: UsingBucket,
    pub key: OrderKey,
}

impl UsingOrdering {
    pub fn new(bucket: UsingBucket, key: OrderKey) -> Self {
        Self { bucket, key }
    }

    pub fn governs(&self, directive: &UsingDirective) -> bool {
        UsingBucket::of(directive) == Some(self.bucket)
    }

    /// Sort key of a governed directive
    pub fn key(&self, directive: &UsingDirective) -> Option<SmolStr> {
        match self.key {
            OrderKey::Target => directive.target_name(),
            OrderKey::AliasName => directive.alias(),
        }
    }

    /// Governed directives of `scope` with their keys, in source order
    pub fn governed(&self, scope: &UsingScope) -> Vec<(UsingDirective, SmolStr)> {
        scope
            .usings()
            .into_iter()
            .filter(|d| self.governs(d))
            .filter_map(|d| {
                let key = self.key(&d)?;
                Some((d, key))
            })
            .collect()
    }

    /// Every adjacent governed pair of `scope` that is out of order
    pub fn inversions(&self, scope: &UsingScope) -> Vec<Inversion> {
        self.governed(scope)
            .windows(2)
            .filter(|pair| is_inverted(&pair[0].1, &pair[1].1))
            .map(|pair| Inversion {
                earlier: pair[0].0.clone(),
                earlier_key: pair[0].1.clone(),
                later: pair[1].0.clone(),
                later_key: pair[1].1.clone(),
            })
            .collect()
    }
}

/// Ordinal (byte-wise, case-sensitive) comparison of two keys
pub fn is_inverted(earlier: &str, later: &str) -> bool {
    later.as_bytes() < earlier.as_bytes()
}
