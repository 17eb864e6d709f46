use crate::core::source::{CoordinateField, FieldMapping};
use crate::domain::model::{Coordinates, Datation, Monument};
use serde_json::Value;

/// Maps one raw record to the canonical shape. Missing or malformed fields become `None`.
pub fn normalize(fields: &FieldMapping, record: &Value) -> Monument {
    Monument {
        id: text_field(record, fields.id),
        coordinates: coordinates(record, fields.coordinates),
        monument_type: text_field(record, fields.type_label),
        municipality: text_field(record, fields.municipality),
        date: datation(record, fields.year),
    }
}

pub fn normalize_all(fields: &FieldMapping, records: &[Value]) -> Vec<Monument> {
    records.iter().map(|record| normalize(fields, record)).collect()
}

fn text_field(record: &Value, name: &str) -> Option<String> {
    match record.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn datation(record: &Value, name: &str) -> Option<Datation> {
    match record.get(name)? {
        Value::Number(n) => Some(
            n.as_i64()
                .map(Datation::Year)
                .unwrap_or_else(|| Datation::Text(n.to_string())),
        ),
        Value::String(s) => Some(Datation::Text(s.clone())),
        _ => None,
    }
}

fn coordinates(record: &Value, field: CoordinateField) -> Option<Coordinates> {
    let parsed = match field {
        CoordinateField::Point(name) => {
            let point = record.get(name)?;
            Coordinates::new(point.get("lat")?.as_f64()?, point.get("lon")?.as_f64()?)
        }
        CoordinateField::Delimited { field, separator } => {
            let raw = record.get(field)?.as_str()?;
            let mut parts = raw.split(separator);
            let lat = parts.next()?.trim().parse::<f64>().ok()?;
            let lon = parts.next()?.trim().parse::<f64>().ok()?;
            if parts.next().is_some() {
                return None;
            }
            Coordinates::new(lat, lon)
        }
    };

    (parsed.lat.is_finite() && parsed.lon.is_finite()).then_some(parsed)
}
