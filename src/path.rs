/// A Type to represent the accumulated Cost of a Path. Every step costs `1`.
pub type Cost = usize;

/// A Path found by one of the searches of this crate
///
/// Stores the sequence of visited Positions, starting with the start and ending with the goal,
/// as well as the total Cost of walking along it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use surface_pathfinding::Path;
    /// let path = Path::new(vec![3, 4, 5], 2);
    ///
    /// assert_eq!(path, vec![3, 4, 5]);
    /// assert_eq!(path.cost(), 2);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Positions in the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Positions. Paths returned by the searches never are.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// Consumes the Path, returning the underlying sequence
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path[..] == **rhs
    }
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<P: Eq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn index() {
        let path = Path::new(vec![0, -1, -2], 2);

        assert_eq!(path[0], 0);
        assert_eq!(path[1], -1);
        assert_eq!(path[2], -2);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![0, 1, 2, 3], 3);

        assert_eq!(&format!("{}", path), "Path[Cost = 3]: 0 -> 1 -> 2 -> 3");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i64>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn ordered_by_cost() {
        let short = Path::new(vec![0, 1], 1);
        let long = Path::new(vec![0, -1, 0, 1], 3);

        assert!(short < long);
        assert_eq!(short.first(), long.first());
    }
}
