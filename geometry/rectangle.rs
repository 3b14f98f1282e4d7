use super::coordinate::Coordinate;

/// 由两个对角点 lo / hi 描述的经纬度矩形，两点不要求有序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub lo: Coordinate,
    pub hi: Coordinate,
}

/// 归一化后的边界（全部闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Rectangle {
    pub fn new(lo: Coordinate, hi: Coordinate) -> Self {
        Self { lo, hi }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.lo.longitude.min(self.hi.longitude),
            right: self.lo.longitude.max(self.hi.longitude),
            top: self.lo.latitude.max(self.hi.latitude),
            bottom: self.lo.latitude.min(self.hi.latitude),
        }
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        self.bounds().contains(point)
    }
}

impl Bounds {
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.longitude >= self.left
            && point.longitude <= self.right
            && point.latitude >= self.bottom
            && point.latitude <= self.top
    }
}
