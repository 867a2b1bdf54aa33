//! Print the rendered body of a single post

use anyhow::Result;

use crate::Portfolio;

pub fn run(portfolio: &Portfolio, identifier: &str) -> Result<()> {
    let resolved = portfolio.resolver().resolve(identifier)?;
    println!("{}", resolved.body);
    Ok(())
}
