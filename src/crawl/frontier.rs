// src/crawl/frontier.rs
// =============================================================================
// Pages waiting to be crawled.
//
// The crawl is depth-first: a page's first link, and everything below it, is
// finished before its second link is started. Instead of recursing we keep a
// stack (Vec) and push a page's children in reverse, so the first child ends
// up on top.
//
//   page P links to [A, B, C]
//   push C, B, A  ->  pop A, crawl A's subtree (pushed above B)  ->  pop B ...
//
// Whether a popped node is actually crawled is decided when it is popped,
// exactly as a recursive call would decide on entry.
// =============================================================================

/// A URL together with how far from the seed it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlNode {
    pub url: String,
    /// Seed is 1, its links are 2, ...
    pub depth: usize,
}

impl CrawlNode {
    pub fn new(url: impl Into<String>, depth: usize) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// LIFO work list for depth-first crawling
#[derive(Debug, Default)]
pub struct Frontier {
    stack: Vec<CrawlNode>,
}

impl Frontier {
    /// A frontier holding only the seed, at depth 1
    pub fn with_seed(seed: &str) -> Self {
        Self {
            stack: vec![CrawlNode::new(seed, 1)],
        }
    }

    pub fn pop(&mut self) -> Option<CrawlNode> {
        self.stack.pop()
    }

    /// Schedules `children` so they come out in the order given
    pub fn push_children(&mut self, children: Vec<CrawlNode>) {
        self.stack.extend(children.into_iter().rev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_starts_at_depth_one() {
        let mut frontier = Frontier::with_seed("https://example.com/");
        assert_eq!(frontier.pop(), Some(CrawlNode::new("https://example.com/", 1)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_children_pop_in_extraction_order() {
        let mut frontier = Frontier::default();
        frontier.push_children(vec![
            CrawlNode::new("a", 2),
            CrawlNode::new("b", 2),
            CrawlNode::new("c", 2),
        ]);
        let order: Vec<String> = std::iter::from_fn(|| frontier.pop()).map(|n| n.url).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_grandchildren_come_before_later_siblings() {
        let mut frontier = Frontier::default();
        frontier.push_children(vec![CrawlNode::new("a", 2), CrawlNode::new("b", 2)]);

        let first = frontier.pop().unwrap();
        assert_eq!(first.url, "a");
        frontier.push_children(vec![CrawlNode::new("a1", 3), CrawlNode::new("a2", 3)]);

        let order: Vec<String> = std::iter::from_fn(|| frontier.pop()).map(|n| n.url).collect();
        assert_eq!(order, vec!["a1", "a2", "b"]);
    }
}
