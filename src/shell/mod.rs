mod options;

use std::io::{BufRead, Write};

use itertools::Itertools;
pub use options::ShellOptions;

use crate::prelude::*;

/// A named string set, as held by the shell.
type NamedSet = Set<String>;

/// Runs set algebra over named sets, one command per input line.
///
/// Every command answers with its output lines followed by `ok`. A command that fails prints
/// `err` and the reason before the `ok`, and leaves every stored set untouched.
pub struct SetShell<W: Write> {
    sets: BTreeMap<String, NamedSet>,
    options: ShellOptions,
    out: W,
}

impl<W: Write> SetShell<W> {
    /// Produces a new shell that writes its responses to `out`.
    pub fn new(options: ShellOptions, out: W) -> SetShell<W> {
        SetShell { sets: BTreeMap::new(), options, out }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads and runs commands until `quit` or the end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        loop
        {
            self.prompt()?;

            let mut cmdstr: String = String::new();
            if input.read_line(&mut cmdstr)? == 0 {
                log::debug!("end of input");
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");
            if cmd == "quit" {
                log::debug!("quit requested");
                return Ok(());
            }

            self.apply(cmd, args.get(1..).unwrap_or(&[]))?;
        }
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "add" => self.add(args),
            | "difference" => self.binary(args, Set::difference),
            | "drop" => self.drop_set(args),
            | "has" => self.has(args),
            | "info" => self.info(),
            | "intersection" => self.binary(args, Set::intersection),
            | "let" => self.let_literal(args),
            | "list" => self.list(),
            | "new" => self.new_set(args),
            | "remove" => self.remove(args),
            | "show" => self.show(args),
            | "size" => self.size(args),
            | "subset" => self.subset(args),
            | "symdiff" => self.binary(args, Set::symmetric_difference),
            | "union" => self.binary(args, Set::union),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err:#}");
                self.err(&err)
            },
        }
    }

    fn new_set(&mut self, args: &[&str]) -> Result<()> {
        let Some((name, values)) = args.split_first() else {
            return Err(anyhow!("usage: new NAME [VALUE...]"));
        };

        let set = Set::from_values(values.iter().map(|v| v.to_string()));
        self.store(name, set)
    }

    fn let_literal(&mut self, args: &[&str]) -> Result<()> {
        let Some((name, literal)) = args.split_first() else {
            return Err(anyhow!("usage: let NAME {{VALUE, ...}}"));
        };

        let set = literal.join(" ").parse::<NamedSet>()?;
        self.store(name, set)
    }

    fn add(&mut self, args: &[&str]) -> Result<()> {
        let Some((name, values)) = args.split_first().filter(|(_, values)| !values.is_empty()) else {
            return Err(anyhow!("usage: add NAME VALUE..."));
        };

        let set = self.get_mut(name)?;
        values.iter().for_each(|v| {
            set.add(v.to_string());
        });
        self.print(name)
    }

    fn remove(&mut self, args: &[&str]) -> Result<()> {
        let Some((name, values)) = args.split_first().filter(|(_, values)| !values.is_empty()) else {
            return Err(anyhow!("usage: remove NAME VALUE..."));
        };

        let set = self.get_mut(name)?;
        values.iter().for_each(|v| {
            set.remove(*v);
        });
        self.print(name)
    }

    fn has(&mut self, args: &[&str]) -> Result<()> {
        let [name, value] = expect_args::<2>(args, "has NAME VALUE")?;
        let found = self.get(name)?.has(value);
        writeln!(self.out, "{found}")?;
        Ok(())
    }

    fn size(&mut self, args: &[&str]) -> Result<()> {
        let [name] = expect_args::<1>(args, "size NAME")?;
        let size = self.get(name)?.size();
        writeln!(self.out, "{size}")?;
        Ok(())
    }

    fn show(&mut self, args: &[&str]) -> Result<()> {
        let [name] = expect_args::<1>(args, "show NAME")?;
        self.print(name)
    }

    fn subset(&mut self, args: &[&str]) -> Result<()> {
        let [lhs, rhs] = expect_args::<2>(args, "subset A B")?;
        let subset = self.get(lhs)?.is_subset(self.get(rhs)?);
        writeln!(self.out, "{subset}")?;
        Ok(())
    }

    /// Applies a set algebra operation to two stored sets, optionally storing the result.
    fn binary(&mut self, args: &[&str], op: fn(&NamedSet, &NamedSet) -> NamedSet) -> Result<()> {
        let (lhs, rhs, target) = match args {
            [lhs, rhs] => (lhs, rhs, None),
            [lhs, rhs, target] => (lhs, rhs, Some(target)),
            _ => return Err(anyhow!("expected two operands and an optional target, received {} arguments", args.len())),
        };

        let result = op(self.get(lhs)?, self.get(rhs)?);
        match target {
            Some(name) => self.store(name, result),
            None => {
                let repr = self.render(&result);
                writeln!(self.out, "{repr}")?;
                Ok(())
            }
        }
    }

    fn drop_set(&mut self, args: &[&str]) -> Result<()> {
        let [name] = expect_args::<1>(args, "drop NAME")?;
        self.sets.remove(name).ok_or_else(|| anyhow!("no set named {name}"))?;
        Ok(())
    }

    /// Lists every stored set with its cardinality.
    fn list(&mut self) -> Result<()> {
        let lines = self.sets.iter().map(|(name, set)| format!("{name} {}", set.size())).collect::<Vec<_>>();
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    // accessors

    fn get(&self, name: &str) -> Result<&NamedSet> {
        self.sets.get(name).ok_or_else(|| anyhow!("no set named {name}"))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut NamedSet> {
        self.sets.get_mut(name).ok_or_else(|| anyhow!("no set named {name}"))
    }

    /// Stores (or replaces) a set under the given name and echoes it.
    fn store(&mut self, name: &str, set: NamedSet) -> Result<()> {
        if self.sets.insert(name.to_owned(), set).is_some() {
            log::debug!("replaced set {name}");
        }
        self.print(name)
    }

    // basic printers

    fn render(&self, set: &NamedSet) -> String {
        match self.options.unordered {
            true => set.to_string(),
            _    => set.notate()
        }
    }

    /// Prints a stored set.
    fn print(&mut self, name: &str) -> Result<()> {
        let repr = self.render(self.get(name)?);
        writeln!(self.out, "{repr}")?;
        Ok(())
    }

    /// Prints the shell's ID.
    fn info(&mut self) -> Result<()>
    {
        writeln!(
            self.out,
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(())
    }

    /// Prints an error to the output stream.
    fn err(&mut self, err: &Error) -> Result<()>
    {
        writeln!(self.out, "err\n{:#}", err)?;
        self.ok()
    }

    /// Prints the ok footer to the output stream.
    fn ok(&mut self) -> Result<()>
    {
        writeln!(self.out, "ok")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.options.prompt {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Destructures exactly `N` arguments, or explains the expected usage.
fn expect_args<'a, const N: usize>(args: &[&'a str], usage: &str) -> Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| {
        anyhow!("usage: {usage} (received {})", args.iter().map(|a| format!("'{a}'")).join(" "))
    })
}
