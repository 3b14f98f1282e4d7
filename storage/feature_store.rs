use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

/// 命名地点。name 为空表示“此处没有要素”
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub name: String,
    pub location: Coordinate,
}

impl Feature {
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// 查询未命中时返回的占位要素
    pub fn unnamed(location: Coordinate) -> Self {
        Self {
            name: String::new(),
            location,
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

/// 只读要素集合，启动时加载一次，之后可被多个调用并发读取
#[derive(Debug, Default)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_features(features: Vec<Feature>) -> Self {
        let mut store = Self::new();
        store.load(features);
        store
    }

    /// 用外部解析好的集合替换当前内容
    pub fn load(&mut self, features: Vec<Feature>) {
        self.features = features;
    }

    /// 按数据集顺序线性扫描，返回第一个位置完全相等的要素；
    /// 没有命中时返回同位置的无名要素
    pub fn match_at(&self, point: Coordinate) -> Feature {
        self.features
            .iter()
            .find(|feature| feature.location == point)
            .cloned()
            .unwrap_or_else(|| Feature::unnamed(point))
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn named_count(&self) -> usize {
        self.features.iter().filter(|f| f.is_named()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> FeatureStore {
        FeatureStore::from_features(vec![
            Feature::new("A", Coordinate::new(0, 0)),
            Feature::new("", Coordinate::new(3, 3)),
            Feature::new("B", Coordinate::new(0, 0)),
            Feature::new("C", Coordinate::new(2, -2)),
        ])
    }

    #[test]
    fn test_match_at_known_point() {
        let store = sample_store();
        assert_eq!(
            store.match_at(Coordinate::new(2, -2)),
            Feature::new("C", Coordinate::new(2, -2))
        );
    }

    #[test]
    fn test_first_match_wins() {
        let store = sample_store();
        assert_eq!(store.match_at(Coordinate::new(0, 0)).name, "A");
    }

    #[test]
    fn test_miss_returns_unnamed_feature_at_query() {
        let store = sample_store();
        let feature = store.match_at(Coordinate::new(1, 1));
        assert_eq!(feature, Feature::unnamed(Coordinate::new(1, 1)));
        assert!(!feature.is_named());
    }

    #[test]
    fn test_match_is_deterministic() {
        let store = sample_store();
        let p = Coordinate::new(3, 3);
        let first = store.match_at(p);
        for _ in 0..10 {
            assert_eq!(store.match_at(p), first);
        }
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut store = sample_store();
        store.load(vec![Feature::new("Z", Coordinate::new(9, 9))]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.match_at(Coordinate::new(0, 0)).name, "");
        assert_eq!(store.named_count(), 1);
    }

    #[test]
    fn test_empty_store() {
        let store = FeatureStore::new();
        assert!(store.is_empty());
        assert_eq!(store.match_at(Coordinate::new(0, 0)).name, "");
    }
}
