// Application layer: the concrete lessons.

pub mod lessons;
