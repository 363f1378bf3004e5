//! Orbit-type tokens and provider key resolution
//!
//! End users think in generic terms ("gps", "gnss", "rapid") while archives
//! key files by specific analysis-center product codes. The alias table here
//! is the single place where those generic tokens are mapped to providers;
//! adding an archive means one new [`ProviderKey`] variant plus one strategy
//! in [`crate::registry`], never a change at call sites.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One orbit product provider
///
/// Every variant corresponds to exactly one retrieval strategy in
/// [`crate::registry`]. Derived from the user's token via [`ProviderKey::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKey {
    /// Daily GPS broadcast navigation file
    BroadcastNav,
    /// IGS final combined orbits
    IgsFinal,
    /// IGS rapid combined orbits
    IgsRapid,
    /// ESA final orbits
    Esa,
    /// GFZ multi-GNSS final orbits
    MultiGnssFinal,
    /// JAXA orbits (GPS + GLONASS)
    Jaxa,
    /// CNES/GRG multi-GNSS orbits
    Grg,
    /// Wuhan University multi-GNSS orbits
    Wuhan,
    /// GFZ rapid multi-GNSS orbits
    GfzRapid,
    /// GFZ ultra-rapid multi-GNSS orbits (takes an hour-of-day parameter)
    GfzUltraRapid,
    /// GFZ multi-GNSS orbits served from the IGN mirror, used when the
    /// primary archive lacks the product
    IgnMirror,
    /// RINEX-3 broadcast navigation file; experimental, not persisted to the
    /// canonical storage tree
    BroadcastRinex3,
}

impl ProviderKey {
    /// Every provider, in token order
    pub const ALL: [ProviderKey; 12] = [
        ProviderKey::IgsFinal,
        ProviderKey::IgsRapid,
        ProviderKey::Jaxa,
        ProviderKey::Grg,
        ProviderKey::Wuhan,
        ProviderKey::MultiGnssFinal,
        ProviderKey::BroadcastNav,
        ProviderKey::GfzRapid,
        ProviderKey::Esa,
        ProviderKey::IgnMirror,
        ProviderKey::BroadcastRinex3,
        ProviderKey::GfzUltraRapid,
    ];

    /// The literal token for this provider
    pub fn token(&self) -> &'static str {
        match self {
            ProviderKey::BroadcastNav => "nav",
            ProviderKey::IgsFinal => "igs",
            ProviderKey::IgsRapid => "igr",
            ProviderKey::Esa => "esa",
            ProviderKey::MultiGnssFinal => "gbm",
            ProviderKey::Jaxa => "jax",
            ProviderKey::Grg => "grg",
            ProviderKey::Wuhan => "wum",
            ProviderKey::GfzRapid => "gfr",
            ProviderKey::GfzUltraRapid => "ultra",
            ProviderKey::IgnMirror => "gnss2",
            ProviderKey::BroadcastRinex3 => "brdc",
        }
    }

    /// Resolve a user-supplied orbit-type token into a provider key
    ///
    /// Aliases are applied first (exact match, first match wins, never
    /// chained); otherwise the token must be one of the literal provider
    /// tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownOrbitType`] for any other token. The
    /// error carries the recognized token list to aid discoverability.
    pub fn resolve(raw: &str) -> Result<Self, ProviderError> {
        let token = raw.trim().to_lowercase();

        if let Some(key) = ALIASES.get(token.as_str()) {
            return Ok(*key);
        }

        token
            .parse()
            .map_err(|_| ProviderError::UnknownOrbitType {
                token: raw.to_string(),
                recognized: recognized_tokens().join(", "),
            })
    }
}

impl FromStr for ProviderKey {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKey::ALL
            .iter()
            .find(|key| key.token() == s)
            .copied()
            .ok_or_else(|| ProviderError::UnknownOrbitType {
                token: s.to_string(),
                recognized: recognized_tokens().join(", "),
            })
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Generic tokens accepted in place of a specific provider code
static ALIASES: Lazy<HashMap<&'static str, ProviderKey>> = Lazy::new(|| {
    HashMap::from([
        // Plain GPS means the daily broadcast navigation file.
        ("gps", ProviderKey::BroadcastNav),
        // Generic multi-GNSS means the GFZ final product.
        ("gnss", ProviderKey::MultiGnssFinal),
        // GPS+GLONASS is served by JAXA.
        ("gps+glo", ProviderKey::Jaxa),
        // Generic rapid means the GFZ rapid product.
        ("rapid", ProviderKey::GfzRapid),
    ])
});

/// All tokens [`ProviderKey::resolve`] accepts: aliases first, then the
/// literal provider tokens
pub fn recognized_tokens() -> Vec<&'static str> {
    let mut tokens: Vec<&'static str> = vec!["gps", "gnss", "gps+glo", "rapid"];
    tokens.extend(ProviderKey::ALL.iter().map(|key| key.token()));
    tokens
}

/// Errors raised while resolving an orbit-type token
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Token is neither an alias nor a literal provider code
    #[error("unrecognized orbit type '{token}' (recognized: {recognized})")]
    UnknownOrbitType {
        /// The token as supplied by the caller
        token: String,
        /// Comma-separated list of accepted tokens
        recognized: String,
    },
}
