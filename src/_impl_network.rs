use crate::{Edge, EdgeGroup, HgncId, LinePlacement, Network, Vertex};
use std::collections::BTreeMap;

impl Edge {
    pub fn new(regulated: HgncId, regulator: HgncId) -> Edge {
        Edge {
            regulated,
            regulator,
        }
    }

    pub fn get_regulated(&self) -> HgncId {
        self.regulated
    }

    pub fn get_regulator(&self) -> HgncId {
        self.regulator
    }

    pub fn is_self_loop(&self) -> bool {
        self.regulated == self.regulator
    }
}

impl Vertex {
    pub fn new(id: HgncId, name: &str) -> Vertex {
        Vertex {
            id,
            name: name.to_string(),
        }
    }

    pub fn get_id(&self) -> HgncId {
        self.id
    }

    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }
}

impl EdgeGroup {
    pub fn new(target: HgncId, regulators: Vec<HgncId>) -> EdgeGroup {
        EdgeGroup { target, regulators }
    }

    pub fn get_target(&self) -> HgncId {
        self.target
    }

    pub fn get_regulators(&self) -> &[HgncId] {
        &self.regulators
    }

    /// Iterate over the edges of this group, in the order of the regulators.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.regulators
            .iter()
            .map(move |regulator| Edge::new(self.target, *regulator))
    }
}

impl Network {
    /// Create a network; `comments` are written after the edge section.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<EdgeGroup>, comments: Vec<String>) -> Network {
        Network {
            vertices,
            edges,
            comments: comments
                .into_iter()
                .map(|line| (LinePlacement::Trailing, line))
                .collect(),
        }
    }

    /// Group `edges` by their regulated vertex.
    ///
    /// Groups are ordered by target id, regulators within a group keep the order in which
    /// they appear in `edges`.
    pub fn collate<I>(edges: I) -> Vec<EdgeGroup>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut groups: BTreeMap<HgncId, Vec<HgncId>> = BTreeMap::new();
        for edge in edges {
            groups
                .entry(edge.regulated)
                .or_default()
                .push(edge.regulator);
        }
        groups
            .into_iter()
            .map(|(target, regulators)| EdgeGroup::new(target, regulators))
            .collect()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edge_groups(&self) -> &[EdgeGroup] {
        &self.edges
    }

    /// All lines which are neither vertices nor edges, in the order in which they are written.
    pub fn comments(&self) -> Vec<&str> {
        self.comments.iter().map(|(_, line)| line.as_str()).collect()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.iter().map(|it| it.regulators.len()).sum()
    }

    /// All edges of the network, group by group.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().flat_map(|group| group.edges())
    }

    /// Copy of this network with the vertex section replaced.
    pub fn with_vertices(&self, vertices: Vec<Vertex>) -> Network {
        Network {
            vertices,
            edges: self.edges.clone(),
            comments: self.comments.clone(),
        }
    }

    /// Copy of this network with the edge section replaced. Empty groups are dropped.
    ///
    /// Lines placed between edge groups stay in place if the new groups have the same targets
    /// in the same order. Otherwise they are moved after the edge section.
    pub fn with_edge_groups(&self, edges: Vec<EdgeGroup>) -> Network {
        let edges = edges
            .into_iter()
            .filter(|it| !it.regulators.is_empty())
            .collect::<Vec<_>>();
        let same_targets = edges.len() == self.edges.len()
            && edges
                .iter()
                .zip(&self.edges)
                .all(|(new, old)| new.target == old.target);
        let comments = self
            .comments
            .iter()
            .map(|(placement, line)| {
                let placement = match placement {
                    LinePlacement::Edge(_) if !same_targets => LinePlacement::Trailing,
                    other => *other,
                };
                (placement, line.clone())
            })
            .collect();
        Network {
            vertices: self.vertices.clone(),
            edges,
            comments,
        }
    }
}
