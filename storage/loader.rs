use std::path::Path;
use std::str::FromStr;

use geojson::GeoJson;
use tracing::{debug, info};

use crate::error::RouteGuideError;
use crate::geometry::Coordinate;
use crate::Result;

use super::feature_store::Feature;

/// 数据集文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// 根据内容自动判断
    Auto,
    /// `[{"location": {"latitude": .., "longitude": ..}, "name": ".."}, ...]`
    Json,
    /// Point 几何的 FeatureCollection，名称取自 `name` 属性
    GeoJson,
}

impl FromStr for DatasetFormat {
    type Err = RouteGuideError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DatasetFormat::Auto),
            "json" => Ok(DatasetFormat::Json),
            "geojson" => Ok(DatasetFormat::GeoJson),
            other => Err(RouteGuideError::Config(format!(
                "Invalid dataset format: '{}'. Must be one of: auto, json, geojson",
                other
            ))),
        }
    }
}

/// 从文件读取并解析要素集合
pub async fn load_features(path: impl AsRef<Path>, format: DatasetFormat) -> Result<Vec<Feature>> {
    let path = path.as_ref();
    debug!("Reading dataset from {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    let features = parse_features(&text, format)?;
    info!(
        "Loaded {} features from {}",
        features.len(),
        path.display()
    );
    Ok(features)
}

pub fn parse_features(text: &str, format: DatasetFormat) -> Result<Vec<Feature>> {
    let format = match format {
        DatasetFormat::Auto => detect_format(text)?,
        other => other,
    };

    match format {
        DatasetFormat::GeoJson => parse_geojson(text),
        _ => parse_json(text),
    }
}

fn detect_format(text: &str) -> Result<DatasetFormat> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    match value {
        serde_json::Value::Object(ref obj) if obj.contains_key("type") => Ok(DatasetFormat::GeoJson),
        serde_json::Value::Array(_) => Ok(DatasetFormat::Json),
        _ => Err(RouteGuideError::Dataset(
            "expected a JSON array of features or a GeoJSON object".to_string(),
        )),
    }
}

fn parse_json(text: &str) -> Result<Vec<Feature>> {
    let features: Vec<Feature> = serde_json::from_str(text)?;
    for feature in &features {
        feature
            .location
            .validated()
            .map_err(|e| RouteGuideError::Dataset(format!("feature '{}': {}", feature.name, e)))?;
    }
    Ok(features)
}

fn parse_geojson(text: &str) -> Result<Vec<Feature>> {
    let geojson = text.parse::<GeoJson>()?;

    let items = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(RouteGuideError::Dataset(
                "GeoJSON dataset must be a Feature or FeatureCollection".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let name = match item.property("name") {
                None | Some(serde_json::Value::Null) => String::new(),
                Some(serde_json::Value::String(name)) => name.clone(),
                Some(other) => {
                    return Err(RouteGuideError::Dataset(format!(
                        "feature #{} has a non-string name: {}",
                        index, other
                    )))
                }
            };

            let geometry = item.geometry.ok_or_else(|| {
                RouteGuideError::Dataset(format!("feature #{} has no geometry", index))
            })?;

            let location = match geometry.value {
                geojson::Value::Point(position) if position.len() >= 2 => {
                    // GeoJSON 坐标顺序为 [经度, 纬度]
                    Coordinate::from_degrees(position[1], position[0]).map_err(|e| {
                        RouteGuideError::Dataset(format!("feature #{}: {}", index, e))
                    })?
                }
                _ => {
                    return Err(RouteGuideError::Dataset(format!(
                        "feature #{} is not a Point",
                        index
                    )))
                }
            };

            Ok(Feature { name, location })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn classic_db() -> serde_json::Value {
        json!([
            {
                "location": {"latitude": 407838351, "longitude": -746143763},
                "name": "Patriots Path, Mendham, NJ 07945, USA"
            },
            {
                "location": {"latitude": 408122808, "longitude": -743999179},
                "name": ""
            }
        ])
    }

    #[test]
    fn test_parse_classic_json() {
        let features = parse_features(&classic_db().to_string(), DatasetFormat::Json).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name, "Patriots Path, Mendham, NJ 07945, USA");
        assert_eq!(features[0].location, Coordinate::new(407838351, -746143763));
        assert!(!features[1].is_named());
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let text = json!([{"location": {"latitude": 1, "longitude": 2}}]).to_string();
        let features = parse_features(&text, DatasetFormat::Auto).unwrap();
        assert_eq!(features[0], Feature::unnamed(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_parse_geojson_collection() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "Origin"},
                    "geometry": {"type": "Point", "coordinates": [-74.0, 40.5]}
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
                }
            ]
        })
        .to_string();

        let features = parse_features(&text, DatasetFormat::Auto).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name, "Origin");
        assert_eq!(features[0].location, Coordinate::new(405_000_000, -740_000_000));
        assert_eq!(features[1].name, "");
    }

    #[test]
    fn test_geojson_rejects_non_point() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "line"},
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
            }]
        })
        .to_string();
        let err = parse_features(&text, DatasetFormat::GeoJson).unwrap_err();
        assert!(matches!(err, RouteGuideError::Dataset(_)));
    }

    #[test]
    fn test_geojson_rejects_non_string_name() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": 42},
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
            }]
        })
        .to_string();
        let err = parse_features(&text, DatasetFormat::GeoJson).unwrap_err();
        assert!(matches!(err, RouteGuideError::Dataset(_)));
        assert!(err.to_string().contains("non-string name"));
    }

    #[test]
    fn test_geojson_null_name_is_unnamed() {
        let text = json!({
            "type": "Feature",
            "properties": {"name": null},
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
        })
        .to_string();
        let features = parse_features(&text, DatasetFormat::GeoJson).unwrap();
        assert!(!features[0].is_named());
    }

    #[test]
    fn test_out_of_range_location_rejected() {
        let text = json!([{"location": {"latitude": 950000000, "longitude": 0}, "name": "x"}])
            .to_string();
        assert!(matches!(
            parse_features(&text, DatasetFormat::Json),
            Err(RouteGuideError::Dataset(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_features("{not json", DatasetFormat::Auto).is_err());
        assert!(parse_features("42", DatasetFormat::Auto).is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("GeoJSON".parse::<DatasetFormat>().unwrap(), DatasetFormat::GeoJson);
        assert_eq!("auto".parse::<DatasetFormat>().unwrap(), DatasetFormat::Auto);
        assert!("xml".parse::<DatasetFormat>().is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", classic_db()).unwrap();

        let features = load_features(file.path(), DatasetFormat::Auto).await.unwrap();
        assert_eq!(features.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_features("/definitely/not/here.json", DatasetFormat::Json)
            .await
            .unwrap_err();
        assert!(matches!(err, RouteGuideError::Io(_)));
    }
}
