
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::fmt::{Display, Formatter};

use quake_inverse_sqrt::QSqrt;

pub const ZERO_EPSILON_F32: f32 = 0.001;

#[derive(Debug, Clone, Copy, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32
}

impl From<Vector> for [f32; 3] {
    fn from(vec: Vector) -> Self {
        [vec.x, vec.y, vec.z]
    }
}

impl From<VectorXY> for Vector {
    fn from(value: VectorXY) -> Self {
        value.xyz()
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < ZERO_EPSILON_F32
        && (self.y - other.y).abs() < ZERO_EPSILON_F32
        && (self.z - other.z).abs() < ZERO_EPSILON_F32
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vector{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z
        }
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z
        }
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Vector{x: -self.x, y: -self.y, z: -self.z}
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f32) -> Self::Output {
        Vector{x: self.x*rhs, y: self.y*rhs, z: self.z*rhs}
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut ret = Vector::default();
        for i in iter {
            ret = ret + i;
        }
        ret
    }
}

impl Div<f32> for Vector {
    type Output = Vector;
    fn div(self, rhs: f32) -> Self::Output {
        Vector {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs
        }
    }
}

impl Vector {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector {x, y, z}
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn dist_to(&self, other: &Self) -> f32 {
        ((self.x-other.x)*(self.x-other.x)
        +(self.y-other.y)*(self.y-other.y)
        +(self.z-other.z)*(self.z-other.z)).sqrt()
    }

    /// 3D Cross product.
    pub fn cross(&self, other: &Self) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x
        }
    }

    pub fn angle_btwn(&self, other: &Self) -> f32 {
        f32::acos(self.dot(other) / (self.len() * other.len()))
    }

    pub fn abs2(&self) -> f32 {
        self.dot(self)
    }

    pub fn len(&self) -> f32 {
        self.abs2().sqrt()
    }

    pub fn xy(&self) -> VectorXY {
        VectorXY{x: self.x, y: self.y}
    }

    pub fn normalized(&self) -> Self {
        // fisqrt never panics for f32
        let i = QSqrt::fast_inverse_sqrt_unchecked(&self.abs2());
        Vector{
            x: self.x * i,
            y: self.y * i,
            z: self.z * i
        }
    }
}

////////////////
/// VectorXY

#[derive(Debug, Clone, Copy, Default)]
pub struct VectorXY {
    pub x: f32,
    pub y: f32
}

impl Display for VectorXY {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "XY({}, {})", self.x, self.y)
    }
}

impl PartialEq for VectorXY {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < ZERO_EPSILON_F32
        && (self.y - other.y).abs() < ZERO_EPSILON_F32
    }
}

impl Add for VectorXY {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        VectorXY{
            x: self.x + rhs.x,
            y: self.y + rhs.y
        }
    }
}

impl Sub for VectorXY {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        VectorXY{
            x: self.x - rhs.x,
            y: self.y - rhs.y
        }
    }
}

impl Neg for VectorXY {
    type Output = Self;
    fn neg(self) -> Self::Output {
        VectorXY{x: -self.x, y: -self.y}
    }
}

impl Mul<f32> for VectorXY {
    type Output = VectorXY;
    fn mul(self, rhs: f32) -> Self::Output {
        VectorXY{x: self.x*rhs, y: self.y*rhs}
    }
}

impl Mul<VectorXY> for f32 {
    type Output = VectorXY;
    fn mul(self, rhs: VectorXY) -> Self::Output {
        rhs * self
    }
}

impl Sum for VectorXY {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut ret = VectorXY::default();
        for i in iter {
            ret = ret + i;
        }
        ret
    }
}

impl Div<f32> for VectorXY {
    type Output = VectorXY;
    fn div(self, rhs: f32) -> Self::Output {
        VectorXY {
            x: self.x / rhs,
            y: self.y / rhs
        }
    }
}

impl From<Vector> for VectorXY {
    fn from(value: Vector) -> Self {
        value.xy()
    }
}

impl From<VectorXY> for [f32; 2] {
    fn from(vec: VectorXY) -> Self {
        [vec.x, vec.y]
    }
}

impl VectorXY {
    pub fn new(x: f32, y: f32) -> Self {
        VectorXY {x, y}
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn dist_to(&self, other: &Self) -> f32 {
        ((self.x-other.x)*(self.x-other.x)
        +(self.y-other.y)*(self.y-other.y)).sqrt()
    }

    /// |v|^2
    pub fn abs2(&self) -> f32 {
        self.dot(self)
    }

    /// |v|
    pub fn len(&self) -> f32 {
        self.abs2().sqrt()
    }

    /// {x, y, 0}
    pub fn xyz(&self) -> Vector {
        Vector{x: self.x, y: self.y, z: 0.0}
    }

    /// same direction but length 1
    pub fn normalized(&self) -> Self {
        // fisqrt never panics for f32
        let i = QSqrt::fast_inverse_sqrt_unchecked(&self.abs2());
        VectorXY{
            x: self.x * i,
            y: self.y * i
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_to_is_euclidean() {
        let a = Vector::new(0.0, 0.0, 0.0);
        let b = Vector::new(3.0, 4.0, 0.0);
        assert!((a.dist_to(&b) - 5.0).abs() < ZERO_EPSILON_F32);
        assert!((b.xy().dist_to(&a.xy()) - 5.0).abs() < ZERO_EPSILON_F32);
    }

    #[test]
    fn xy_drops_height() {
        let a = Vector::new(1.0, 2.0, 300.0);
        let b = Vector::new(1.0, 2.0, -40.0);
        assert!(a.xy().dist_to(&b.xy()) < ZERO_EPSILON_F32);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vector::new(10.0, 0.0, 0.0).normalized();
        // fisqrt is approximate, allow a loose tolerance
        assert!((v.len() - 1.0).abs() < 0.01);

        let xy = VectorXY::new(0.0, -8.0).normalized();
        assert!((xy.len() - 1.0).abs() < 0.01);
        assert!(xy.y < 0.0);
    }

    #[test]
    fn cross_of_axes_gives_third_axis() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector::new(0.0, 0.0, 1.0));
        // anticommutative
        assert_eq!(y.cross(&x), Vector::new(0.0, 0.0, -1.0));
        // parallel vectors have no cross product
        assert_eq!(x.cross(&(x * 3.0)), Vector::default());
    }

    #[test]
    fn angle_btwn_perpendicular_is_right_angle() {
        let x = Vector::new(2.0, 0.0, 0.0);
        let y = Vector::new(0.0, 5.0, 0.0);
        assert!((x.angle_btwn(&y) - std::f32::consts::FRAC_PI_2).abs() < 0.001);
        assert!(x.angle_btwn(&x).abs() < 0.001);
    }

    #[test]
    fn vector_ops_sanity() {
        let v = Vector::new(2.0, -4.0, 6.0);
        assert_eq!(-v, Vector::new(-2.0, 4.0, -6.0));
        assert_eq!(v / 2.0, Vector::new(1.0, -2.0, 3.0));
        assert_eq!(v * 0.5, 0.5 * v);

        let total: Vector = [v, -v, v].into_iter().sum();
        assert_eq!(total, v);

        let xy = VectorXY::new(3.0, -1.0);
        assert_eq!(-xy, VectorXY::new(-3.0, 1.0));
        assert_eq!(xy / 2.0, VectorXY::new(1.5, -0.5));
        assert_eq!(xy * 2.0, 2.0 * xy);
        let xy_total: VectorXY = [xy, xy].into_iter().sum();
        assert_eq!(xy_total, VectorXY::new(6.0, -2.0));
        assert_eq!(xy + xy - xy, xy);
    }
}
