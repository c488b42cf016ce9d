use super::*;

/// `G(n,p)` graphs generate every possible edge `{u, v}` with `u < v` in a graph with `n` nodes
/// with probability `p` independent from each other.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = Some(prob);
        self
    }

    /// Updates `p` such that every node has expected degree `deg`
    pub fn avg_deg(self, deg: f64) -> Self {
        assert!(self.n > 1, "Set the number of nodes before the average degree!");
        self.prob(deg / (self.n - 1) as f64)
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let Some(p) = self.p else {
            panic!("Probility of Gnp was not set!");
        };

        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if rng.random_bool(p) {
                    edges.push(Edge(u, v));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().nodes(20).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(20).prob(1.0).generate(rng).len(), 190);
    }

    #[test]
    fn edges_are_normalized_and_unique() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let edges = Gnp::new().nodes(50).avg_deg(5.0).generate(rng);

        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert!(edges.windows(2).all(|w| w[0] < w[1]));

        let graph = AdjArrayUndir::gnp(rng, 50, 0.1);
        assert_eq!(graph.number_of_nodes(), 50);
    }
}
