use crate::geometry::{Bounds, Rectangle};

use super::feature_store::{Feature, FeatureStore};

/// 要素是否落在矩形内（四边闭区间）。无名要素永远不在区域内
pub fn in_region(feature: &Feature, rect: &Rectangle) -> bool {
    in_bounds(feature, &rect.bounds())
}

fn in_bounds(feature: &Feature, bounds: &Bounds) -> bool {
    feature.is_named() && bounds.contains(&feature.location)
}

/// 按数据集顺序惰性枚举区域内的要素，每次调用都会重新扫描
pub fn list_in_region<'a>(
    store: &'a FeatureStore,
    rect: &Rectangle,
) -> impl Iterator<Item = &'a Feature> + 'a {
    let bounds = rect.bounds();
    store
        .features()
        .iter()
        .filter(move |feature| in_bounds(feature, &bounds))
}
