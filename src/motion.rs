pub const HERO_FADE_RANGE: (f64, f64) = (0.0, 0.5);
pub const HERO_OPACITY: (f64, f64) = (1.0, 0.0);
pub const HERO_SCALE: (f64, f64) = (1.0, 0.8);
pub const HERO_TRANSLATE_Y_PX: (f64, f64) = (0.0, -100.0);

pub const STAGGER_DELAY_CHILDREN_S: f64 = 0.3;
pub const STAGGER_CHILDREN_S: f64 = 0.1;
pub const PROJECT_CARD_IMMEDIATE: usize = 4;

/// How far the viewport start has travelled through a target, from the
/// target's start reaching the top (0) to its end reaching the top (1).
pub fn scroll_progress(target_top: f64, target_height: f64) -> f64 {
    if target_height <= 0.0 {
        return if target_top < 0.0 { 1.0 } else { 0.0 };
    }

    (-target_top / target_height).clamp(0.0, 1.0)
}

/// Linear map from `input` to `output`, clamped at both ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return if value < input.0 { output.0 } else { output.1 };
    }

    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl HeroTransform {
    pub fn from_progress(progress: f64) -> Self {
        Self {
            opacity: interpolate(progress, HERO_FADE_RANGE, HERO_OPACITY),
            scale: interpolate(progress, HERO_FADE_RANGE, HERO_SCALE),
            translate_y: interpolate(progress, HERO_FADE_RANGE, HERO_TRANSLATE_Y_PX),
        }
    }

    pub fn to_style(self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.3});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self::from_progress(0.0)
    }
}

/// Delay for the `index`-th child of a staggered reveal container.
pub fn stagger_delay(index: usize) -> f64 {
    STAGGER_DELAY_CHILDREN_S + STAGGER_CHILDREN_S * index as f64
}

pub fn project_card_delay(index: usize) -> f64 {
    if index < PROJECT_CARD_IMMEDIATE {
        STAGGER_CHILDREN_S * index as f64
    } else {
        STAGGER_DELAY_CHILDREN_S + STAGGER_CHILDREN_S * (index - PROJECT_CARD_IMMEDIATE) as f64
    }
}

pub fn delay_style(seconds: f64) -> String {
    format!("transition-delay: {seconds:.2}s;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn progress_tracks_hero_leaving_the_viewport() {
        assert_eq!(scroll_progress(0.0, 800.0), 0.0);
        assert!(approx(scroll_progress(-200.0, 800.0), 0.25));
        assert_eq!(scroll_progress(-1600.0, 800.0), 1.0);
        assert_eq!(scroll_progress(120.0, 800.0), 0.0);
    }

    #[test]
    fn interpolate_clamps_outside_input_range() {
        assert_eq!(interpolate(-1.0, (0.0, 0.5), (1.0, 0.0)), 1.0);
        assert_eq!(interpolate(0.9, (0.0, 0.5), (1.0, 0.0)), 0.0);
        assert!(approx(interpolate(0.25, (0.0, 0.5), (0.0, -100.0)), -50.0));
    }

    #[test]
    fn hero_is_untouched_at_the_top() {
        let transform = HeroTransform::from_progress(0.0);
        assert_eq!(transform.opacity, 1.0);
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.translate_y, 0.0);
    }

    #[test]
    fn hero_is_gone_halfway_through() {
        let transform = HeroTransform::from_progress(0.75);
        assert_eq!(transform.opacity, 0.0);
        assert!(approx(transform.scale, 0.8));
        assert!(approx(transform.translate_y, -100.0));
        assert_eq!(
            transform.to_style(),
            "opacity: 0.000; transform: translateY(-100.00px) scale(0.800);"
        );
    }

    #[test]
    fn project_cards_after_the_fourth_wait_for_the_container() {
        assert!(approx(project_card_delay(0), 0.0));
        assert!(approx(project_card_delay(3), 0.3));
        assert!(approx(project_card_delay(4), 0.3));
        assert!(approx(project_card_delay(6), 0.5));
        assert!(approx(stagger_delay(2), 0.5));
    }
}
