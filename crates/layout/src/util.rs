/// Largest glue adjustment shipout will apply, in output units.
const GLUE_LIMIT: f64 = 1_000_000_000.0;

/// Clamps a glue adjustment so runaway glue ratios cannot produce absurd
/// coordinates.
pub(crate) fn vet_glue(glue: f64) -> f64 {
    glue.clamp(-GLUE_LIMIT, GLUE_LIMIT)
}

/// Robust floating point comparison for layout calculations.
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    const EPSILON: f64 = 1e-9;
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}
