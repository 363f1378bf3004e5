//! Retrieval strategies for each orbit product provider
//!
//! A [`Strategy`] is a pure description of how one provider lays out its
//! archive: base URL, directory rule, filename rule, and whether the
//! retrieved file belongs in the canonical local tree. Strategies never touch
//! the network.
//!
//! [`strategy_for`] matches exhaustively on [`ProviderKey`], so a provider
//! without a strategy is a compile error rather than a runtime lookup miss.

use crate::date::CanonicalDate;
use crate::provider::ProviderKey;

const CDDIS_BASE: &str = "https://cddis.nasa.gov/archive/gnss";
const GFZ_BASE: &str = "https://isdcftp.gfz-potsdam.de/gnss";
const IGN_BASE: &str = "https://igs.ign.fr/pub/igs";

/// Which branch of the local storage tree a product belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCategory {
    /// Broadcast navigation files
    Nav,
    /// Precise orbit (SP3) products
    Sp3,
}

impl ProductCategory {
    /// Directory name used under `{root}/{year}/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            ProductCategory::Nav => "nav",
            ProductCategory::Sp3 => "sp3",
        }
    }
}

/// Filename convention used by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Naming {
    /// Short daily broadcast name, e.g. `brdc0150.21n.gz`
    ShortNav,
    /// Short GPS-week SP3 name, e.g. `igs21405.sp3.Z`
    ShortSp3 { center: &'static str },
    /// Long multi-GNSS SP3 name, e.g. `GFZ0MGXRAP_20210150000_01D_05M_ORB.SP3.gz`
    LongSp3 { product: &'static str },
    /// Long SP3 name under the GFZ rapid branch (`products/rapid/w{week}`)
    GfzRapidSp3 { product: &'static str },
    /// Long ultra-rapid SP3 name carrying an hour-of-day field
    UltraSp3 { product: &'static str },
    /// RINEX-3 broadcast name, e.g. `BRDC00IGS_R_20210150000_01D_MN.rnx.gz`
    Rinex3Nav,
}

/// A fully resolved remote file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProduct {
    /// Complete download URL
    pub url: String,
    /// Filename component, as stored locally
    pub filename: String,
}

/// How one provider's archive is laid out
///
/// Pure data plus formatting; building a [`RemoteProduct`] from a date
/// performs no I/O.
#[derive(Debug, Clone)]
pub struct Strategy {
    key: ProviderKey,
    base_url: &'static str,
    naming: Naming,
    category: ProductCategory,
    persist: bool,
}

impl Strategy {
    /// The provider this strategy serves
    pub fn key(&self) -> ProviderKey {
        self.key
    }

    /// Storage branch for the retrieved file
    pub fn category(&self) -> ProductCategory {
        self.category
    }

    /// Whether the product is stored in the canonical local tree
    ///
    /// Experimental products (RINEX-3 broadcast) are fetched but deliberately
    /// kept out of the tree because they are not yet operational.
    pub fn persist(&self) -> bool {
        self.persist
    }

    /// Build the remote location for `date`
    ///
    /// `hour` is consumed only by ultra-rapid products (0-23, callers default
    /// it to 0); every other naming rule ignores it.
    pub fn remote_product(&self, date: &CanonicalDate, hour: u32) -> RemoteProduct {
        let (dir, filename) = match self.naming {
            Naming::ShortNav => (
                format!(
                    "data/daily/{:04}/{:03}/{:02}n",
                    date.year(),
                    date.doy(),
                    date.yy()
                ),
                format!("brdc{:03}0.{:02}n.gz", date.doy(), date.yy()),
            ),
            Naming::ShortSp3 { center } => (
                format!("products/{}", date.gps_week()),
                format!("{}{}{}.sp3.Z", center, date.gps_week(), date.gps_dow()),
            ),
            Naming::LongSp3 { product } => (
                format!("products/mgex/{}", date.gps_week()),
                format!(
                    "{}_{:04}{:03}0000_01D_05M_ORB.SP3.gz",
                    product,
                    date.year(),
                    date.doy()
                ),
            ),
            Naming::GfzRapidSp3 { product } => (
                format!("products/rapid/w{}", date.gps_week()),
                format!(
                    "{}_{:04}{:03}0000_01D_05M_ORB.SP3.gz",
                    product,
                    date.year(),
                    date.doy()
                ),
            ),
            Naming::UltraSp3 { product } => (
                format!("products/ultra/w{}", date.gps_week()),
                format!(
                    "{}_{:04}{:03}{:02}00_02D_05M_ORB.SP3.gz",
                    product,
                    date.year(),
                    date.doy(),
                    hour
                ),
            ),
            Naming::Rinex3Nav => (
                format!("data/daily/{:04}/brdc", date.year()),
                format!(
                    "BRDC00IGS_R_{:04}{:03}0000_01D_MN.rnx.gz",
                    date.year(),
                    date.doy()
                ),
            ),
        };

        RemoteProduct {
            url: format!("{}/{}/{}", self.base_url, dir, filename),
            filename,
        }
    }
}

/// Look up the retrieval strategy for a provider
///
/// Total over [`ProviderKey`]; the match is exhaustive so every provider has
/// exactly one strategy by construction.
pub fn strategy_for(key: ProviderKey) -> Strategy {
    match key {
        ProviderKey::BroadcastNav => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::ShortNav,
            category: ProductCategory::Nav,
            persist: true,
        },
        ProviderKey::IgsFinal => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::ShortSp3 { center: "igs" },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::IgsRapid => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::ShortSp3 { center: "igr" },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::Esa => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::ShortSp3 { center: "esa" },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::MultiGnssFinal => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::LongSp3 {
                product: "GFZ0MGXRAP",
            },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::Jaxa => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::LongSp3 {
                product: "JAX0MGXFIN",
            },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::Grg => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::LongSp3 {
                product: "GRG0MGXFIN",
            },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::Wuhan => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::LongSp3 {
                product: "WUM0MGXFIN",
            },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::GfzRapid => Strategy {
            key,
            base_url: GFZ_BASE,
            naming: Naming::GfzRapidSp3 {
                product: "GFZ0OPSRAP",
            },
            category: ProductCategory::Sp3,
            persist: true,
        },
        ProviderKey::GfzUltraRapid => Strategy {
            key,
            base_url: GFZ_BASE,
            naming: Naming::UltraSp3 {
                product: "GFZ0OPSULT",
            },
            category: ProductCategory::Sp3,
            persist: true,
        },
        // Distinct host, not a naming variant: the IGN mirror carries the
        // same GFZ product for days missing from the primary archive.
        ProviderKey::IgnMirror => Strategy {
            key,
            base_url: IGN_BASE,
            naming: Naming::LongSp3 {
                product: "GFZ0MGXRAP",
            },
            category: ProductCategory::Sp3,
            persist: true,
        },
        // Not yet an operational product, so it never enters the tree.
        ProviderKey::BroadcastRinex3 => Strategy {
            key,
            base_url: CDDIS_BASE,
            naming: Naming::Rinex3Nav,
            category: ProductCategory::Nav,
            persist: false,
        },
    }
}
