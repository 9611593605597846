// Cuts shared by several trigger families.

/// Highest calo region index; region cuts are symmetric around its centre.
pub(crate) const MAX_REGION: f32 = 21.0;

// Calo region index inside `[region_cut, 21 - region_cut]`.
pub(crate) fn in_region(eta: f32, region_cut: f32) -> bool {
    !(eta < region_cut || eta > MAX_REGION - region_cut)
}

// Absolute pseudorapidity inside the cut.
pub(crate) fn within_eta(eta: f32, eta_cut: f32) -> bool {
    eta.abs() <= eta_cut
}

// Quality parameters are stored as floats like every other parameter.
pub(crate) fn passes_quality(quality: i32, minimum: f32) -> bool {
    quality as f32 >= minimum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_region() {
        assert!(in_region(4.5, 4.5));
        assert!(in_region(16.5, 4.5));
        assert!(!in_region(4.0, 4.5));
        assert!(!in_region(17.0, 4.5));
        assert!(in_region(0.0, 0.0));
    }

    #[test]
    fn test_within_eta() {
        assert!(within_eta(-2.1, 2.1));
        assert!(!within_eta(2.2, 2.1));
    }

    #[test]
    fn test_passes_quality() {
        assert!(passes_quality(4, 4.0));
        assert!(!passes_quality(3, 4.0));
    }
}
