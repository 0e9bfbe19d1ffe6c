use shared_models::Testimonial;

pub const STAR: char = '★';
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Filled-star glyphs for a rating, clamped to `MIN_RATING..=MAX_RATING`.
pub fn stars(rating: u8) -> Vec<char> {
    vec![STAR; usize::from(rating.clamp(MIN_RATING, MAX_RATING))]
}

pub fn testimonial_stars(testimonial: &Testimonial) -> Vec<char> {
    stars(testimonial.rating)
}
