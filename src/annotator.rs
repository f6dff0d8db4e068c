/*! BookNLP invocation

The annotator is an external program: it reads a text file and writes a tab-separated token table
(see [crate::io::reader::TokenStore]) next to it, with a `.tokens` extension.
!*/
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::error::Error;

pub struct BookNlp {
    command: Vec<String>,
    tmp_dir: PathBuf,
}

impl BookNlp {
    /// `command` is split with shell quoting rules:
    /// the first word is the program, the rest its first arguments.
    pub fn new(command: &str, tmp_dir: PathBuf) -> Result<Self, Error> {
        let words = shlex::split(command)
            .ok_or_else(|| Error::Annotator(format!("unbalanced quoting in {:?}", command)))?;
        if words.is_empty() {
            return Err(Error::Annotator("empty annotator command".to_string()));
        }
        Ok(Self {
            command: words,
            tmp_dir,
        })
    }

    /// Location of the token table produced for `input`.
    pub fn tokens_path(input: &Path) -> PathBuf {
        input.with_extension("tokens")
    }

    fn build_command(&self, input: &Path, tokens: &Path) -> Command {
        let mut cmd = Command::new(&self.command[0]);
        cmd.args(&self.command[1..])
            .arg("-doc")
            .arg(input)
            .arg("-p")
            .arg(&self.tmp_dir)
            .arg("-tok")
            .arg(tokens)
            .args(["-f", "-q"]);
        cmd
    }

    /// Annotate `input`, returning the path of the token table.
    pub fn process(&self, input: &Path) -> Result<PathBuf, Error> {
        let tokens = Self::tokens_path(input);
        let mut cmd = self.build_command(input, &tokens);
        info!("running annotator: {:?}", cmd);

        let status = cmd
            .status()
            .map_err(|e| Error::Annotator(format!("could not start {}: {}", self.command[0], e)))?;
        if !status.success() {
            return Err(Error::Annotator(format!(
                "{} exited with {}",
                self.command[0], status
            )));
        }

        debug!("token table written to {:?}", tokens);
        Ok(tokens)
    }
}
