// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::{fmt, cmp::Ordering, hash::{Hash, Hasher}};

use compare::Compare;

use crate::{ByIdentity, Error};

// ----------------------------------------------------------------------------
// --- ITEM ID ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes the identity of an item from the knapsack instance.
/// Identities are assigned at construction from the position of the item in
/// the input arrays: the first item is `ItemId(1)`, the last one is `ItemId(n)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ItemId(pub usize);
impl ItemId {
    #[inline]
    /// This function returns the id (numeric value) of the item.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack::ItemId;
    /// assert_eq!(1, ItemId(1).id());
    /// assert_eq!(2, ItemId(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
    /// The position of the item in the instance arrays (0 based).
    #[inline]
    pub fn index(self) -> usize {
        self.0 - 1
    }
}
impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One candidate item of the knapsack instance. An item is immutable once it
/// has been created: its weight and benefit never change, and its ratio is
/// computed once and for all at construction.
///
/// Two items are equal iff they have the same identity. The natural order
/// (`Ord`) of the items is the order of their identities. The secondary
/// order (ratio, then identity) is provided by `ByRatioThenIdentity`.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    id     : ItemId,
    weight : usize,
    benefit: usize,
    ratio  : f64,
}
impl Item {
    /// Creates a new item. The weight must be strictly positive (otherwise
    /// the ratio is undefined) and the benefit must not be negative.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack::{Item, ItemId, Error};
    /// let item = Item::new(ItemId(1), 4, 10).unwrap();
    /// assert_eq!(2.5, item.ratio());
    ///
    /// assert!(matches!(Item::new(ItemId(2), 0, 10), Err(Error::InvalidItem{..})));
    /// ```
    pub fn new(id: ItemId, weight: isize, benefit: isize) -> Result<Self, Error> {
        if weight <= 0 || benefit < 0 {
            return Err(Error::InvalidItem { id: id.id(), weight, benefit });
        }
        let weight  = weight as usize;
        let benefit = benefit as usize;
        Ok(Item { id, weight, benefit, ratio: benefit as f64 / weight as f64 })
    }
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }
    #[inline]
    pub fn weight(&self) -> usize {
        self.weight
    }
    #[inline]
    pub fn benefit(&self) -> usize {
        self.benefit
    }
    /// benefit / weight
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Item {}
impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}
impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(#{},w:{},b:{},r:{:.3})", self.id, self.weight, self.benefit, self.ratio)
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A solution is a subset of the items of an instance along with the total
/// weight and total benefit of its members. It does not own the items, it
/// only remembers their identities (always sorted in ascending order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    /// The identities of the selected items in ascending order
    items  : Vec<ItemId>,
    /// The sum of the weights of the selected items
    weight : usize,
    /// The sum of the benefits of the selected items
    benefit: usize,
}
impl Solution {
    /// Sums up the weights and benefits of the given items. These are
    /// expected to come from one `ItemPool`, whose totals are known to fit
    /// in a `usize`.
    pub fn from_items<'a, I>(items: I) -> Self
    where I: IntoIterator<Item = &'a Item>
    {
        let mut members = items.into_iter().collect::<Vec<_>>();
        members.sort_unstable_by(|a, b| ByIdentity.compare(*a, *b));

        let mut solution = Solution::default();
        for item in members {
            solution.items.push(item.id());
            solution.weight  += item.weight();
            solution.benefit += item.benefit();
        }
        solution
    }
    /// The identities of the members (ascending order)
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }
    pub fn weight(&self) -> usize {
        self.weight
    }
    pub fn benefit(&self) -> usize {
        self.benefit
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.binary_search(&id).is_ok()
    }
    /// Returns true iff the total weight of this solution fits in a sack of
    /// the given capacity.
    pub fn is_feasible(&self, capacity: usize) -> bool {
        self.weight <= capacity
    }
}
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ids = self.items.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{ {} }}\tweight sum = {}\tbenefit sum = {}", ids, self.weight, self.benefit)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_item {
    use crate::{Item, ItemId, Error};

    #[test]
    fn ratio_is_benefit_over_weight() {
        let item = Item::new(ItemId(1), 4, 5).unwrap();
        assert_eq!(1.25, item.ratio());
        assert_eq!(4, item.weight());
        assert_eq!(5, item.benefit());
    }
    #[test]
    fn zero_weight_is_rejected() {
        let err = Item::new(ItemId(3), 0, 5).unwrap_err();
        assert_eq!(Error::InvalidItem { id: 3, weight: 0, benefit: 5 }, err);
    }
    #[test]
    fn negative_weight_is_rejected() {
        assert!(Item::new(ItemId(1), -2, 5).is_err());
    }
    #[test]
    fn negative_benefit_is_rejected() {
        assert!(Item::new(ItemId(1), 2, -5).is_err());
    }
    #[test]
    fn zero_benefit_is_accepted() {
        let item = Item::new(ItemId(1), 2, 0).unwrap();
        assert_eq!(0.0, item.ratio());
    }
    #[test]
    fn equality_only_depends_on_identity() {
        let a = Item::new(ItemId(1), 2, 3).unwrap();
        let b = Item::new(ItemId(1), 7, 9).unwrap();
        let c = Item::new(ItemId(2), 2, 3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }
    #[test]
    fn display() {
        let item = Item::new(ItemId(2), 4, 5).unwrap();
        assert_eq!("(#2,w:4,b:5,r:1.250)", item.to_string());
    }
}
