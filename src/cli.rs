//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "article-features",
    about = "article entity/character/source feature extraction."
)]
/// Holds every command that is callable by the `article-features` command.
pub enum ArticleFeatures {
    #[structopt(about = "Concatenate articles into a single annotator input")]
    Concat(Concat),
    #[structopt(about = "Extract features from annotator output")]
    Extract(Extract),
    #[structopt(about = "Concatenate, annotate and extract")]
    Run(Run),
}

#[derive(Debug, StructOpt)]
/// Concat command and parameters.
///
/// ```sh
/// USAGE:
///     article-features concat <metadata> <data-folder> <dst>
///
/// ARGS:
///     <metadata>       metadata table (Filename, Author, Date)
///     <data-folder>    folder containing article files
///     <dst>            annotator input destination
/// ```
pub struct Concat {
    #[structopt(parse(from_os_str), help = "metadata table (Filename, Author, Date)")]
    pub metadata: PathBuf,
    #[structopt(parse(from_os_str), help = "folder containing article files")]
    pub data_folder: PathBuf,
    #[structopt(parse(from_os_str), help = "annotator input destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
pub struct Extract {
    #[structopt(parse(from_os_str), help = "metadata table (Filename, Author, Date)")]
    pub metadata: PathBuf,
    #[structopt(parse(from_os_str), help = "annotator token table")]
    pub tokens: PathBuf,
    #[structopt(parse(from_os_str), help = "feature table destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Run command and parameters.
///
/// The annotator input is written next to the metadata table, as `<metadata stem>-concat.txt`.
pub struct Run {
    #[structopt(parse(from_os_str), help = "metadata table (Filename, Author, Date)")]
    pub metadata: PathBuf,
    #[structopt(parse(from_os_str), help = "folder containing article files")]
    pub data_folder: PathBuf,
    #[structopt(parse(from_os_str), help = "feature table destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "booknlp-cmd",
        help = "annotator command",
        default_value = "./runjava novels/BookNLP"
    )]
    pub booknlp_cmd: String,
    #[structopt(
        parse(from_os_str),
        long = "tmp-dir",
        help = "annotator working directory",
        default_value = "data/temp"
    )]
    pub tmp_dir: PathBuf,
}
