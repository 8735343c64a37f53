use crate::{EdgeGroup, HgncId, LinePlacement, Network, Vertex};
use lazy_static::lazy_static;
use regex::Regex;
use std::convert::TryFrom;

lazy_static! {
    /// `VERTEX <id> <name>`, where the name is the rest of the line.
    static ref VERTEX_LINE: Regex = Regex::new("^VERTEX ([0-9]+)(?: (.*))?$").unwrap();

    /// `EDGES <target> (<regulator> <regulator> ... )`.
    static ref EDGES_LINE: Regex = Regex::new("^EDGES ([0-9]+) \\(([0-9 ]*)\\)$").unwrap();
}

impl TryFrom<&str> for Network {
    type Error = String;

    /// Parse a network from its text format.
    ///
    /// The first line must be `VERTICES` and the vertex section must be closed by
    /// `ENDVERTICES`. Any other line that is neither a vertex nor an edge line is kept
    /// as a comment, together with its position, so that it is written back unchanged.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut lines = value.lines().map(|it| it.trim_end_matches('\r'));
        match lines.next() {
            Some("VERTICES") => (),
            Some(line) => return Err(format!("Expected `VERTICES` line, found `{}`.", line)),
            None => return Err("Expected `VERTICES` line, found empty input.".to_string()),
        }

        let mut network = Network::default();
        let mut closed = false;
        for line in lines.by_ref() {
            if line == "ENDVERTICES" {
                closed = true;
                break;
            }
            if let Some(captures) = VERTEX_LINE.captures(line) {
                let id = captures[1].parse::<HgncId>()?;
                let name = captures.get(2).map(|it| it.as_str()).unwrap_or("");
                network.vertices.push(Vertex::new(id, name));
            } else {
                let placement = LinePlacement::Vertex(network.vertices.len());
                network.comments.push((placement, line.to_string()));
            }
        }
        if !closed {
            return Err("Missing `ENDVERTICES` line.".to_string());
        }

        for line in lines {
            if let Some(captures) = EDGES_LINE.captures(line) {
                let target = captures[1].parse::<HgncId>()?;
                let regulators = captures[2]
                    .split_whitespace()
                    .map(|it| it.parse::<HgncId>())
                    .collect::<Result<Vec<_>, _>>()?;
                network.edges.push(EdgeGroup::new(target, regulators));
            } else {
                let placement = LinePlacement::Edge(network.edges.len());
                network.comments.push((placement, line.to_string()));
            }
        }

        Ok(network)
    }
}
