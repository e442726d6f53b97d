//! Closed-form comparison curves drawn next to measured timings.

/// Asymptotic reference shapes for the scaling chart, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceCurve {
    Linearithmic,
    Quadratic,
    Linear,
}

impl ReferenceCurve {
    pub const ALL: [ReferenceCurve; 3] = [
        ReferenceCurve::Linearithmic,
        ReferenceCurve::Quadratic,
        ReferenceCurve::Linear,
    ];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            ReferenceCurve::Linearithmic => "n log n",
            ReferenceCurve::Quadratic => "n²",
            ReferenceCurve::Linear => "n",
        }
    }

    /// Evaluate `scale * f(n)`.
    pub fn eval(self, n: u64, scale: f64) -> f64 {
        let n = n as f64;
        let value = match self {
            ReferenceCurve::Linearithmic => n * n.ln(),
            ReferenceCurve::Quadratic => n * n,
            ReferenceCurve::Linear => n,
        };
        scale * value
    }

    /// Curve points over the measured sizes, skipping values a log axis
    /// cannot place (n·ln n is 0 at n = 1).
    pub fn points(self, sizes: &[u64], scale: f64) -> Vec<(u64, f64)> {
        sizes
            .iter()
            .map(|&n| (n, self.eval(n, scale)))
            .filter(|&(_, y)| y > 0.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_the_documented_forms() {
        assert_eq!(
            ReferenceCurve::Linearithmic.eval(1024, 1e-6),
            1e-6 * (1024.0 * 1024f64.ln())
        );
        assert_eq!(ReferenceCurve::Quadratic.eval(1000, 1e-6), 1.0);
        assert_eq!(ReferenceCurve::Linear.eval(1_000_000, 1e-6), 1.0);
    }

    #[test]
    fn labels_are_stable() {
        let labels: Vec<&str> = ReferenceCurve::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["n log n", "n²", "n"]);
    }

    #[test]
    fn points_skip_values_a_log_axis_cannot_place() {
        let sizes = [1, 4];
        assert_eq!(
            ReferenceCurve::Linearithmic.points(&sizes, 1e-6),
            vec![(4, 1e-6 * (4.0 * 4f64.ln()))]
        );
        assert_eq!(ReferenceCurve::Linear.points(&sizes, 1e-6).len(), 2);
    }
}
