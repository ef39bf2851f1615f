use crate::{Lifetime, TypeDescriptor};

/// The three candidate sequences produced by classification, each in the
/// universe's original order.
#[derive(Debug, Default)]
pub struct LifetimeBuckets<'a> {
    pub scoped: Vec<&'a TypeDescriptor>,
    pub transient: Vec<&'a TypeDescriptor>,
    pub singleton: Vec<&'a TypeDescriptor>,
}

/// Partitions descriptors into lifetime buckets.
///
/// A descriptor lands in a bucket iff it is concrete and tagged with that
/// bucket's lifetime. Untagged and non-concrete descriptors are dropped.
/// Pure filter; an empty input yields empty buckets.
pub fn classify<'a, I>(types: I) -> LifetimeBuckets<'a>
where
    I: IntoIterator<Item = &'a TypeDescriptor>,
{
    let mut buckets = LifetimeBuckets::default();
    for descriptor in types {
        if !descriptor.is_concrete() {
            continue;
        }
        match descriptor.lifetime() {
            Some(Lifetime::Scoped) => buckets.scoped.push(descriptor),
            Some(Lifetime::Transient) => buckets.transient.push(descriptor),
            Some(Lifetime::Singleton) => buckets.singleton.push(descriptor),
            None => {}
        }
    }
    buckets
}
