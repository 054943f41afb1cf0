use clap::Parser;
use dirtree::tree;
use dirtree::Options;
use std::process;

fn main() {
    let cli = Options::parse();

    match tree(&cli.path, &cli) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => {
            eprintln!("dirtree: {}", err);
            process::exit(1);
        }
    }
}
