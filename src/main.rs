//! # article-features
//!
//! Builds per-article feature tables (organizations, locations, characters and quotation sources)
//! from BookNLP token annotations.
//!
//! ```sh
//! USAGE:
//!     article-features <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     concat     Concatenate articles into a single annotator input
//!     extract    Extract features from annotator output
//!     help       Prints this message or the help of the given subcommand(s)
//!     run        Concatenate, annotate and extract
//! ```
//!
//! Logging is configured with `RUST_LOG`.
use article_features::annotator::BookNlp;
use article_features::error::Error;
use article_features::pipelines::{self, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::ArticleFeatures::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::ArticleFeatures::Concat(c) => {
            let p = pipelines::Concat::new(c.metadata, c.data_folder, c.dst);
            p.run()?;
        }
        cli::ArticleFeatures::Extract(e) => {
            let p = pipelines::Extract::new(e.metadata, e.tokens, e.dst);
            p.run()?;
        }
        cli::ArticleFeatures::Run(r) => {
            let annotator = BookNlp::new(&r.booknlp_cmd, r.tmp_dir)?;
            let p = pipelines::Full::new(r.metadata, r.data_folder, r.dst, annotator);
            if let Err(e) = p.run() {
                error!("{}", e);
                return Err(e);
            }
        }
    };
    Ok(())
}
