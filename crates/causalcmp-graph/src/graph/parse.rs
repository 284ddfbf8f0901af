//! Compact text form for graphs: `"X-->Y, Y<->Z, W"`.
//!
//! Entries are separated by commas, semicolons, or newlines. An entry is
//! either a bare node name or `A <conn> B` where the connector is three
//! characters: a left mark (`-`, `<`, `o`), a `-`, and a right mark (`-`,
//! `>`, `o`). Whitespace around the connector is optional, but names that
//! end in a lowercase `o` need it.

use causalcmp_core::errors::GraphError;

use super::{Edge, Endpoint, Graph, Node};

/// Parse a graph whose nodes are all measured and created on first mention.
pub fn parse_graph(text: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    for entry in entries(text) {
        let parsed = parse_entry(entry)?;
        for name in parsed.names() {
            if graph.node(name).is_none() {
                graph.add_node(Node::measured(name));
            }
        }
        add_parsed(&mut graph, &parsed)?;
    }
    Ok(graph)
}

/// Parse a graph over a fixed node list. Every name mentioned must be in
/// `nodes`; nodes never mentioned stay isolated.
pub fn parse_graph_with_nodes(nodes: &[Node], text: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::with_nodes(nodes.iter().cloned());
    for entry in entries(text) {
        let parsed = parse_entry(entry)?;
        for name in parsed.names() {
            if graph.node(name).is_none() {
                return Err(GraphError::NodeNotFound {
                    name: name.to_string(),
                });
            }
        }
        add_parsed(&mut graph, &parsed)?;
    }
    Ok(graph)
}

enum Entry<'a> {
    Node(&'a str),
    Edge {
        left: &'a str,
        right: &'a str,
        at_left: Endpoint,
        at_right: Endpoint,
    },
}

impl<'a> Entry<'a> {
    fn names(&self) -> Vec<&'a str> {
        match self {
            Entry::Node(n) => vec![n],
            Entry::Edge { left, right, .. } => vec![left, right],
        }
    }
}

fn entries(text: &str) -> impl Iterator<Item = &str> {
    text.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn add_parsed(graph: &mut Graph, entry: &Entry<'_>) -> Result<(), GraphError> {
    if let Entry::Edge {
        left,
        right,
        at_left,
        at_right,
    } = entry
    {
        let (Some(a), Some(b)) = (graph.node(left).cloned(), graph.node(right).cloned()) else {
            return Err(GraphError::NodeNotFound {
                name: format!("{left}/{right}"),
            });
        };
        graph.add_edge(Edge::new(a, b, *at_left, *at_right))?;
    }
    Ok(())
}

fn parse_entry(entry: &str) -> Result<Entry<'_>, GraphError> {
    let err = |message: &str| GraphError::Parse {
        input: entry.to_string(),
        message: message.to_string(),
    };

    let parts: Vec<&str> = entry.split_whitespace().collect();
    let (left, conn, right) = match parts.as_slice() {
        [name] if !name.contains('-') => {
            check_name(name).map_err(|m| err(&m))?;
            return Ok(Entry::Node(name));
        }
        [left, conn, right] => (*left, *conn, *right),
        [compact] => split_compact(compact).ok_or_else(|| err("no edge connector found"))?,
        _ => return Err(err("expected `A --> B` or a node name")),
    };

    check_name(left).map_err(|m| err(&m))?;
    check_name(right).map_err(|m| err(&m))?;
    let (at_left, at_right) = parse_connector(conn).ok_or_else(|| err("unknown edge connector"))?;
    Ok(Entry::Edge {
        left,
        right,
        at_left,
        at_right,
    })
}

/// Split `X-->Y` into name, connector, name. The first `-` is either the
/// middle of the connector (after `<` or `o`) or its left mark.
fn split_compact(s: &str) -> Option<(&str, &str, &str)> {
    let dash = s.find('-')?;
    let start = match s[..dash].chars().last() {
        Some('<') | Some('o') if dash >= 2 => dash - 1,
        _ => dash,
    };
    let end = start + 3;
    if start == 0 || end >= s.len() || !s.is_char_boundary(end) {
        return None;
    }
    Some((&s[..start], &s[start..end], &s[end..]))
}

fn parse_connector(conn: &str) -> Option<(Endpoint, Endpoint)> {
    let chars: Vec<char> = conn.chars().collect();
    match chars.as_slice() {
        [l, '-', r] => {
            let left = Endpoint::from_left_symbol(*l)?;
            let right = Endpoint::from_right_symbol(*r)?;
            if left == Endpoint::Null || right == Endpoint::Null {
                return None;
            }
            Some((left, right))
        }
        _ => None,
    }
}

fn check_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("empty node name".to_string());
    }
    if let Some(bad) = name.chars().find(|c| matches!(c, '<' | '>' | '-')) {
        return Err(format!("node name {name} contains '{bad}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_and_spaced_forms_agree() {
        let a = parse_graph("X-->Y, Y<->Z, Z o-o W").unwrap();
        let b = parse_graph("X --> Y; Y <-> Z\nZo-oW").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.node_names(), vec!["X", "Y", "Z", "W"]);
        assert_eq!(a.edge_count(), 3);
    }

    #[test]
    fn every_connector_parses() {
        for conn in ["-->", "<--", "<->", "---", "o-o", "o->", "<-o", "--o", "o--"] {
            let g = parse_graph(&format!("A{conn}B")).unwrap();
            let edge = g.edges().pop().unwrap();
            assert_eq!(edge.connector(), conn);
        }
    }

    #[test]
    fn isolated_nodes_and_errors() {
        let g = parse_graph("A, B-->C").unwrap();
        assert_eq!(g.node_count(), 3);
        assert!(g.adjacent_nodes(&Node::measured("A")).is_empty());

        assert!(matches!(parse_graph("A=>B"), Err(GraphError::Parse { .. })));
        assert!(matches!(parse_graph("A-->A"), Err(GraphError::SelfLoop { .. })));
        assert!(matches!(
            parse_graph("A-->B, B-->A"),
            Err(GraphError::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn fixed_node_list_keeps_types() {
        let nodes = [Node::measured("X"), Node::latent("L"), Node::measured("Y")];
        let g = parse_graph_with_nodes(&nodes, "L-->X, L-->Y").unwrap();
        assert!(g.node("L").unwrap().is_latent());
        assert!(matches!(
            parse_graph_with_nodes(&nodes, "X-->Q"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }
}
