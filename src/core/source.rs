use crate::domain::model::SourceKind;
use crate::domain::ports::ConfigProvider;

pub const DEFAULT_PORTAL: &str =
    "https://opendata.lillemetropole.fr/api/explore/v2.1/catalog/datasets";

/// Where a source keeps its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    /// `{"lat": .., "lon": ..}` object.
    Point(&'static str),
    /// `"lat<sep>lon"` string.
    Delimited {
        field: &'static str,
        separator: char,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub dataset: &'static str,
    pub id: &'static str,
    /// Field copied into the canonical `type`.
    pub type_label: &'static str,
    /// Field matched by the `LIKE` clause. Lille filters on `denomination` but labels with `edifice`.
    pub type_filter: &'static str,
    pub coordinates: CoordinateField,
    pub municipality: &'static str,
    pub year: &'static str,
}

const ARMENTIERES: FieldMapping = FieldMapping {
    dataset: "monuments-historiques-armentieres",
    id: "monum_his_com_id",
    type_label: "appellation_courante",
    type_filter: "appellation_courante",
    coordinates: CoordinateField::Point("coordonnees_geographiques"),
    municipality: "commune",
    year: "datation_bati_lmcu",
};

const LILLE: FieldMapping = FieldMapping {
    dataset: "monuments-historiques-lille",
    id: "id_merimee",
    type_label: "edifice",
    type_filter: "denomination",
    coordinates: CoordinateField::Delimited {
        field: "coord_geo",
        separator: ',',
    },
    municipality: "commune",
    year: "datation_bati_lmcu",
};

const ROUBAIX: FieldMapping = FieldMapping {
    dataset: "liste-monuments-historiques-de-roubaix",
    id: "monum_his_com_id",
    type_label: "appellation_courante",
    type_filter: "appellation_courante",
    coordinates: CoordinateField::Point("geo_point_2d"),
    municipality: "commune",
    year: "datation_bati_lmcu",
};

impl SourceKind {
    pub fn mapping(&self) -> &'static FieldMapping {
        match self {
            SourceKind::Armentieres => &ARMENTIERES,
            SourceKind::Lille => &LILLE,
            SourceKind::Roubaix => &ROUBAIX,
        }
    }

    pub fn default_endpoint(&self) -> String {
        format!("{}/{}/records", DEFAULT_PORTAL, self.mapping().dataset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceDescriptor {
    pub kind: SourceKind,
    pub endpoint: String,
    pub fields: &'static FieldMapping,
}

impl SourceDescriptor {
    pub fn new(kind: SourceKind, endpoint: impl Into<String>) -> Self {
        Self {
            kind,
            endpoint: endpoint.into(),
            fields: kind.mapping(),
        }
    }

    /// The three sources against the public portal.
    pub fn defaults() -> Vec<Self> {
        SourceKind::ALL
            .iter()
            .map(|kind| Self::new(*kind, kind.default_endpoint()))
            .collect()
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Vec<Self> {
        SourceKind::ALL
            .iter()
            .map(|kind| Self::new(*kind, config.source_endpoint(*kind)))
            .collect()
    }
}
