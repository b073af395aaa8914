use crate::collections::FxIndexSet;
use crate::constants::{Location, Weight, UNREACHABLE};
use crate::error::HubMapError;
use crate::search::{dijkstra::Dijkstra, FrontierStrategy, ShortestPath};
use crate::statistics::SearchStats;
use hub_reader::{HubDef, HubNetwork, Link};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::{cmp::Ordering, fmt, hash::Hash, path::Path};

/// Hub identifier, position of the hub in the arena of its [`HubMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HubIndex(u32);

impl HubIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        HubIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        HubIndex(u32::MAX)
    }
}

impl From<usize> for HubIndex {
    fn from(ix: usize) -> Self {
        HubIndex::new(ix)
    }
}

/// Short version of `HubIndex::new`
pub fn hub_index(index: usize) -> HubIndex {
    HubIndex::new(index)
}

/// A named point of the network.
///
/// `distance` and `path` hold the best known route from the source of the
/// owning [`HubMap`]. Both are only written by the shortest path search.
///
/// Hubs are identified by name: equality, hashing and ordering only look at
/// the name. The ordering puts shorter names first and compares names of the
/// same length lexicographically, so `B` < `AA` < `AB`.
#[derive(Debug, Clone)]
pub struct Hub {
    name: String,
    location: Location,
    distance: Weight,
    path: Vec<HubIndex>,
}

impl Hub {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Hub {
            name: name.into(),
            location: (x, y),
            distance: UNREACHABLE,
            path: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Cumulative distance from the source, [`UNREACHABLE`] if there is no route.
    pub fn distance(&self) -> Weight {
        self.distance
    }

    /// Route from the source to this hub, source first. Empty if unreachable.
    pub fn path(&self) -> &[HubIndex] {
        &self.path
    }

    pub fn is_reachable(&self) -> bool {
        self.distance < UNREACHABLE
    }

    pub(crate) fn set_distance(&mut self, distance: Weight) {
        self.distance = distance;
    }

    pub(crate) fn set_path(&mut self, path: Vec<HubIndex>) {
        self.path = path;
    }
}

impl PartialEq for Hub {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Hub {}

impl Hash for Hub {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Hub {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hub {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .chars()
            .count()
            .cmp(&other.name.chars().count())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Undirected hub network with the shortest paths from a single source.
///
/// The map owns every [`Hub`], adjacency and paths refer to hubs by
/// [`HubIndex`]. The structure never changes after construction and the
/// shortest path search has always run to completion before a map is handed
/// out.
#[derive(Debug, Clone)]
pub struct HubMap {
    pub(crate) hubs: Vec<Hub>,
    pub(crate) adjacency: Vec<FxIndexSet<HubIndex>>,
    pub(crate) source: HubIndex,
    pub(crate) strategy: FrontierStrategy,
    index: FxHashMap<String, HubIndex>,
    dangling_links: usize,
    stats: SearchStats,
}

impl HubMap {
    /// Builds the map and computes the shortest paths from `start`.
    ///
    /// Links that name unknown hubs are dropped with a warning, self-loops and
    /// repeated links have no effect.
    ///
    /// Fails with [`HubMapError::HubNotFound`] if `start` is not one of `hubs`
    /// and with [`HubMapError::DuplicateHub`] if a name is defined twice.
    pub fn new(hubs: Vec<HubDef>, links: Vec<Link>, start: &str) -> Result<Self, HubMapError> {
        Self::with_strategy(hubs, links, start, FrontierStrategy::default())
    }

    pub fn with_strategy(
        hubs: Vec<HubDef>,
        links: Vec<Link>,
        start: &str,
        strategy: FrontierStrategy,
    ) -> Result<Self, HubMapError> {
        let now = std::time::Instant::now();
        info!(
            "BEGIN building hub map from {} hubs and {} links",
            hubs.len(),
            links.len()
        );

        let mut index: FxHashMap<String, HubIndex> =
            FxHashMap::with_capacity_and_hasher(hubs.len(), Default::default());
        let mut arena = Vec::with_capacity(hubs.len());

        for HubDef { name, x, y } in hubs {
            let hub_idx = HubIndex::new(arena.len());

            assert!(
                HubIndex::end() != hub_idx,
                "Maximum number of hubs exceeded"
            );

            if index.contains_key(&name) {
                return Err(HubMapError::DuplicateHub(name));
            }
            index.insert(name.clone(), hub_idx);
            arena.push(Hub::new(name, x, y));
        }

        let source = *index
            .get(start)
            .ok_or_else(|| HubMapError::HubNotFound(start.to_string()))?;

        let mut adjacency = vec![FxIndexSet::default(); arena.len()];
        let mut dangling_links = 0;

        for Link { a, b } in links {
            let (Some(&a_idx), Some(&b_idx)) = (index.get(&a), index.get(&b)) else {
                warn!("Dropping link {}-{}: unknown hub", a, b);
                dangling_links += 1;
                continue;
            };

            if a_idx == b_idx {
                debug!("Ignoring self-loop on {}", a);
                continue;
            }

            adjacency[a_idx.index()].insert(b_idx);
            adjacency[b_idx.index()].insert(a_idx);
        }

        let mut g = HubMap {
            hubs: arena,
            adjacency,
            source,
            strategy,
            index,
            dangling_links,
            stats: SearchStats::default(),
        };

        let home = &mut g.hubs[source.index()];
        home.set_distance(0.0);
        home.set_path(vec![source]);

        g.build_paths();

        info!(
            "FINISHED building hub map. {} of {} hubs reachable from {}. Took {:?}",
            g.reachable_count(),
            g.num_hubs(),
            start,
            now.elapsed()
        );
        Ok(g)
    }

    pub fn from_network(network: &HubNetwork, start: &str) -> Result<Self, HubMapError> {
        Self::new(
            network.get_hubs().clone(),
            network.get_links().clone(),
            start,
        )
    }

    pub fn from_path(path: &Path, start: &str) -> Result<Self, HubMapError> {
        let (hubs, links) = HubNetwork::from_path(path)?.into_parts();
        Self::new(hubs, links, start)
    }

    /// Runs the shortest path search from the source on the current state.
    ///
    /// Construction already did this, running it again on a built map leaves
    /// every distance and path as it is.
    pub fn build_paths(&mut self) -> &SearchStats {
        let mut dijkstra = Dijkstra::new(self);
        dijkstra.run();
        let stats = dijkstra.stats;

        info!("{}", stats);
        self.stats = stats;
        &self.stats
    }

    /// Returns the shortest path from the source to the hub called `end`.
    ///
    /// The path is empty if the hub cannot be reached.
    pub fn find_path(&self, end: &str) -> Result<ShortestPath<'_>, HubMapError> {
        let hub = self.hub(end)?;

        let hubs = hub
            .path()
            .iter()
            .map(|hub_idx| &self.hubs[hub_idx.index()])
            .collect();
        let sp = ShortestPath::new(hubs, hub.distance());

        debug!("Path to {}: {}", end, sp);
        Ok(sp)
    }

    pub fn hub(&self, name: &str) -> Result<&Hub, HubMapError> {
        self.index_of(name)
            .map(|hub_idx| &self.hubs[hub_idx.index()])
            .ok_or_else(|| HubMapError::HubNotFound(name.to_string()))
    }

    pub fn hub_at(&self, hub_idx: HubIndex) -> Option<&Hub> {
        self.hubs.get(hub_idx.index())
    }

    pub fn index_of(&self, name: &str) -> Option<HubIndex> {
        self.index.get(name).copied()
    }

    pub fn source(&self) -> &Hub {
        &self.hubs[self.source.index()]
    }

    pub fn source_index(&self) -> HubIndex {
        self.source
    }

    /// Returns an iterator over all hubs in the order they were defined
    pub fn hubs(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.iter()
    }

    /// All hubs, shorter names first
    pub fn hubs_sorted(&self) -> Vec<&Hub> {
        let mut hubs: Vec<&Hub> = self.hubs.iter().collect();
        hubs.sort();
        hubs
    }

    pub fn hub_indices(&self) -> impl Iterator<Item = HubIndex> {
        (0..self.hubs.len()).map(HubIndex::new)
    }

    /// Hubs directly linked to `hub_idx`, in the order the links were read.
    ///
    /// **Panics** if the hub does not exist
    pub fn neighbors(&self, hub_idx: HubIndex) -> impl Iterator<Item = HubIndex> + '_ {
        self.adjacency[hub_idx.index()].iter().copied()
    }

    pub fn is_linked(&self, a: HubIndex, b: HubIndex) -> bool {
        self.adjacency
            .get(a.index())
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    pub fn num_hubs(&self) -> usize {
        self.hubs.len()
    }

    /// Number of distinct undirected links
    pub fn num_links(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Number of links dropped during construction because they named an unknown hub
    pub fn dangling_links(&self) -> usize {
        self.dangling_links
    }

    pub fn reachable_count(&self) -> usize {
        self.hubs.iter().filter(|hub| hub.is_reachable()).count()
    }

    pub fn strategy(&self) -> FrontierStrategy {
        self.strategy
    }

    /// Statistics of the last shortest path search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn print_info(&self) {
        println!(
            "HubMap:\t#Hubs: {}, #Links: {}, #Reachable: {}, Source: {}",
            self.num_hubs(),
            self.num_links(),
            self.reachable_count(),
            self.source()
        );
    }
}

impl fmt::Display for HubMap {
    /// One line per hub with its neighbors, both in hub order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut order: Vec<HubIndex> = self.hub_indices().collect();
        order.sort_by(|a, b| self.hubs[a.index()].cmp(&self.hubs[b.index()]));

        for hub_idx in order {
            let mut neighbors: Vec<&Hub> = self
                .neighbors(hub_idx)
                .map(|n| &self.hubs[n.index()])
                .collect();
            neighbors.sort();

            let names: Vec<&str> = neighbors.iter().map(|hub| hub.name()).collect();
            writeln!(f, "{}: [{}]", self.hubs[hub_idx.index()], names.join(", "))?;
        }
        Ok(())
    }
}
