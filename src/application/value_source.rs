// Value source seam for synthetic series values

pub trait ValueSource: Send + Sync {
    /// Draw one independent value.
    fn draw(&self) -> f64;
}
