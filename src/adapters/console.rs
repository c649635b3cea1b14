use crate::core::{BoundedStore, Narrator, Result, StepOutcome, StoreSnapshot};
use std::io::Write;

/// 以文字敘述每個步驟，格式與原本的示範程式相同
pub struct ConsoleNarrator<W: Write> {
    out: W,
}

impl ConsoleNarrator<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn created(&mut self, name: &str, store: &BoundedStore) -> Result<()> {
        writeln!(self.out, "{}: {}", name, store)?;
        Ok(())
    }

    fn step(&mut self, outcome: &StepOutcome) -> Result<()> {
        match (outcome.action.as_str(), outcome.requested) {
            ("inspect", _) => {
                writeln!(self.out, "{} getters:", outcome.store)?;
                writeln!(self.out, "balance = {}", outcome.balance)?;
                writeln!(self.out, "capacity = {}", outcome.capacity)?;
                writeln!(self.out, "available_space = {}", outcome.available)?;
                return Ok(());
            }
            (action, Some(amount)) => {
                writeln!(self.out, "{}.{}({})", outcome.store, action, amount)?;
            }
            _ => {}
        }

        if let Some(returned) = outcome.returned {
            writeln!(self.out, "received {}", returned)?;
        }
        writeln!(self.out, "{}: {}", outcome.store, outcome.description)?;
        Ok(())
    }

    fn finished(&mut self, final_states: &[StoreSnapshot]) -> Result<()> {
        writeln!(self.out, "Final state:")?;
        for state in final_states {
            writeln!(
                self.out,
                "  {}: balance = {}, space remaining {}",
                state.name, state.balance, state.available
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}
