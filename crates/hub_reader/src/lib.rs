//! Reader for line-oriented hub network files.
//!
//! ```text
//! 3
//! A 0 0
//! B 3 4
//! C 6 8
//!
//! A-B
//! B-C
//! ```
//!
//! The first line holds the number of hub definitions, followed by exactly
//! that many `<name> <x> <y>` lines. Every remaining non-blank line is a link
//! `<name>-<name>`. Links are not checked against the definitions here, that
//! is up to whoever builds a graph from the network.
use log::{debug, info};
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
};

mod error;
pub use error::ReadError;

/// A hub definition as it appears in the network file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubDef {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl HubDef {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// Undirected link between two hubs, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub a: String,
    pub b: String,
}

impl Link {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubNetwork {
    hubs: Vec<HubDef>,
    links: Vec<Link>,
}

impl HubNetwork {
    pub fn new() -> Self {
        HubNetwork {
            hubs: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn add_hub(&mut self, name: impl Into<String>, x: i32, y: i32) {
        self.hubs.push(HubDef::new(name, x, y));
    }

    pub fn add_link(&mut self, a: impl Into<String>, b: impl Into<String>) {
        self.links.push(Link::new(a, b));
    }

    pub fn get_hubs(&self) -> &Vec<HubDef> {
        &self.hubs
    }

    pub fn get_links(&self) -> &Vec<Link> {
        &self.links
    }

    /// Splits the network into its hub definitions and links.
    pub fn into_parts(self) -> (Vec<HubDef>, Vec<Link>) {
        (self.hubs, self.links)
    }

    pub fn from_path(path: &Path) -> Result<HubNetwork, ReadError> {
        let now = std::time::Instant::now();
        info!("BEGIN parsing {}", path.display());

        let file = File::open(path)?;
        let network = HubNetwork::from_reader(BufReader::new(file))?;

        info!(
            "FINISHED parsing. {} hubs, {} links. Took {:?}",
            network.hubs.len(),
            network.links.len(),
            now.elapsed()
        );
        Ok(network)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<HubNetwork, ReadError> {
        let mut network = HubNetwork::new();
        let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));

        // Hub count, leading blank lines are skipped
        let expected = loop {
            let Some((line_no, line)) = lines.next() else {
                return Err(ReadError::MissingCount);
            };
            let line = line?;
            let value = line.trim();
            if value.is_empty() {
                continue;
            }
            break value
                .parse::<usize>()
                .map_err(|_| ReadError::InvalidCount {
                    line: line_no,
                    value: value.to_string(),
                })?;
        };
        network.hubs.reserve(expected);

        for found in 0..expected {
            let Some((line_no, line)) = lines.next() else {
                return Err(ReadError::MissingHubs { expected, found });
            };
            network.hubs.push(parse_hub(line_no, &line?)?);
        }

        for (line_no, line) in lines {
            let line = line?;
            let content = line.trim();
            if content.is_empty() {
                continue;
            }
            network.links.push(parse_link(line_no, content)?);
        }

        debug!(
            "Read {} hubs and {} links",
            network.hubs.len(),
            network.links.len()
        );
        Ok(network)
    }

    /// Writes the network back in the format accepted by [`HubNetwork::from_reader`].
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), ReadError> {
        writeln!(writer, "{}", self.hubs.len())?;
        for HubDef { name, x, y } in self.hubs.iter() {
            writeln!(writer, "{} {} {}", name, x, y)?;
        }
        writeln!(writer)?;
        for Link { a, b } in self.links.iter() {
            writeln!(writer, "{}-{}", a, b)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl FromStr for HubNetwork {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HubNetwork::from_reader(s.as_bytes())
    }
}

fn parse_hub(line_no: usize, line: &str) -> Result<HubDef, ReadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [name, x, y] = tokens[..] else {
        return Err(ReadError::InvalidHub {
            line: line_no,
            content: line.trim().to_string(),
        });
    };

    let coordinate = |value: &str| {
        value
            .parse::<i32>()
            .map_err(|_| ReadError::InvalidCoordinate {
                line: line_no,
                value: value.to_string(),
            })
    };

    Ok(HubDef::new(name, coordinate(x)?, coordinate(y)?))
}

/// Only the first two `-` separated fields are used. Names that do not match a
/// hub definition are left for the graph builder to drop.
fn parse_link(line_no: usize, content: &str) -> Result<Link, ReadError> {
    let mut names = content.split('-').map(str::trim);
    let (Some(a), Some(b)) = (names.next(), names.next()) else {
        return Err(ReadError::InvalidLink {
            line: line_no,
            content: content.to_string(),
        });
    };

    if a.is_empty() || b.is_empty() || names.next().is_some() {
        debug!("line {}: ambiguous link `{}`, using `{}-{}`", line_no, content, a, b);
    }
    Ok(Link::new(a, b))
}
