use crate::utils::error::Result;
use std::io::Write;

/// A self-contained lesson that prints its demonstration to a console sink.
pub trait Lesson {
    fn name(&self) -> &'static str;
    fn summary(&self) -> &'static str;
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

impl<L: Lesson + ?Sized> Lesson for Box<L> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn summary(&self) -> &'static str {
        (**self).summary()
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        (**self).run(out)
    }
}
