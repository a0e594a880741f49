use crate::config::DEFAULT_MODEL_SCALE;

/// Upper bounds (exclusive) paired with the model scale used below them.
const BREAKPOINTS: [(f64, f32); 3] = [(480.0, 18.0), (768.0, 20.0), (1024.0, 19.0)];

pub fn model_scale_for_width(width: f64) -> f32 {
    BREAKPOINTS
        .iter()
        .find(|(bound, _)| width < *bound)
        .map(|(_, scale)| *scale)
        .unwrap_or(DEFAULT_MODEL_SCALE)
}

pub fn current_model_scale() -> f32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(model_scale_for_width)
        .unwrap_or(DEFAULT_MODEL_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_into_the_next_band() {
        assert_eq!(model_scale_for_width(0.0), 18.0);
        assert_eq!(model_scale_for_width(479.0), 18.0);
        assert_eq!(model_scale_for_width(479.9), 18.0);
        assert_eq!(model_scale_for_width(480.0), 20.0);
        assert_eq!(model_scale_for_width(767.0), 20.0);
        assert_eq!(model_scale_for_width(768.0), 19.0);
        assert_eq!(model_scale_for_width(1023.0), 19.0);
        assert_eq!(model_scale_for_width(1024.0), 16.0);
        assert_eq!(model_scale_for_width(2560.0), 16.0);
    }
}
