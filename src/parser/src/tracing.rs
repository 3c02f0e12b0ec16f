//! Some helpers for tracing a parse.

use std::fmt::{Display, Formatter, Result};

use crate::Parser;

#[cfg(feature = "trace")]
use crate::Action;

impl Parser<'_, '_> {
    #[cfg(feature = "trace")]
    pub(crate) fn trace(&self, action: Action) {
        eprintln!("{:>6} {:<20} {self}", self.steps(), action);
    }
}

impl Display for Parser<'_, '_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{:<9} {:>4}  ", self.state(), self.cursor())?;
        self.fmt_working(f)?;
        write!(f, "  ")?;
        self.fmt_input(f)
    }
}

impl Parser<'_, '_> {
    fn fmt_working(&self, f: &mut Formatter) -> Result {
        write!(f, "[")?;

        for (i, symbol) in self.working_stack().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }

        write!(f, "]")
    }

    fn fmt_input(&self, f: &mut Formatter) -> Result {
        write!(f, "[")?;

        for (i, symbol) in self.input_stack().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }

        write!(f, "]")
    }
}
