//! Trie binaire de profondeur fixe (6 niveaux) indexé par motif 6 points.
//!
//! Le bit i du motif (LSB d'abord) choisit la branche au niveau i :
//! 0 → gauche, 1 → droite. Seules les feuilles de profondeur 6 portent
//! un symbole. Les nœuds vivent dans une arène (`Vec`), les liens sont
//! des indices.

use br_core::pattern::DotPattern;
use br_core::traits::Encoder;

/// Index of the root node in the arena.
const ROOT: usize = 0;

/// Un nœud du trie. Les nœuds intermédiaires n'ont pas de symbole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolNode {
    left: Option<usize>,
    right: Option<usize>,
    symbol: Option<char>,
}

impl SymbolNode {
    /// Payload of a leaf node.
    #[must_use]
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// True if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline(always)]
    fn child(&self, bit: bool) -> Option<usize> {
        if bit { self.right } else { self.left }
    }
}

/// Trie de décodage : construit une fois, lu ensuite sans verrou.
///
/// # Example
/// ```
/// use br_braille::tree::SymbolTree;
/// use br_core::pattern::{BrailleEncoder, DotPattern};
/// use br_core::traits::Encoder;
///
/// let tree = SymbolTree::build(&BrailleEncoder);
/// let h = BrailleEncoder.to_pattern('h');
/// assert_eq!(tree.lookup(h).and_then(|n| n.symbol()), Some('h'));
/// assert_eq!(tree.lookup(DotPattern::EMPTY).and_then(|n| n.symbol()), Some(' '));
/// ```
#[derive(Clone, Debug)]
pub struct SymbolTree {
    nodes: Vec<SymbolNode>,
    symbols: usize,
}

impl Default for SymbolTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTree {
    /// Number of edges from the root to any leaf.
    pub const DEPTH: usize = DotPattern::DOTS;

    /// Empty tree: a root without children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![SymbolNode::default()],
            symbols: 0,
        }
    }

    /// Build the full tree: space, then every letter a–z.
    #[must_use]
    pub fn build<E: Encoder + ?Sized>(encoder: &E) -> Self {
        let mut tree = Self::new();
        for ch in std::iter::once(' ').chain('a'..='z') {
            tree.insert(ch, encoder);
        }
        log::debug!(
            "Arbre de décodage construit : {} symboles, {} nœuds",
            tree.len(),
            tree.node_count()
        );
        tree
    }

    /// Insert `ch` under the path given by its encoded pattern.
    pub fn insert<E: Encoder + ?Sized>(&mut self, ch: char, encoder: &E) {
        self.insert_pattern(encoder.to_pattern(ch), ch);
    }

    /// Walk bits 0..5 of `pattern`, creating missing children, and attach
    /// `symbol` to the depth-6 node. An existing payload is replaced.
    pub fn insert_pattern(&mut self, pattern: DotPattern, symbol: char) {
        let mut current = ROOT;
        for level in 0..Self::DEPTH {
            let bit = pattern.is_set(level);
            current = match self.nodes[current].child(bit) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(SymbolNode::default());
                    let node = &mut self.nodes[current];
                    if bit {
                        node.right = Some(next);
                    } else {
                        node.left = Some(next);
                    }
                    next
                }
            };
        }
        let leaf = &mut self.nodes[current];
        if leaf.symbol.replace(symbol).is_none() {
            self.symbols += 1;
        }
    }

    /// Walk the 6-bit path of `pattern`. `None` as soon as a child is missing.
    #[must_use]
    pub fn lookup(&self, pattern: DotPattern) -> Option<&SymbolNode> {
        let mut current = ROOT;
        for level in 0..Self::DEPTH {
            current = self.nodes[current].child(pattern.is_set(level))?;
        }
        self.nodes.get(current)
    }

    /// Root node.
    #[must_use]
    pub fn root(&self) -> &SymbolNode {
        &self.nodes[ROOT]
    }

    /// Number of symbols stored in leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols
    }

    /// True if no symbol has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols == 0
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
