//! Read-only lookups over an assembled region tree.

use crate::domain::Region;

/// All regions whose long name contains `needle` (case-insensitive), in pre-order.
pub fn search<'a>(root: &'a Region, needle: &str) -> Vec<&'a Region> {
    let needle = needle.to_lowercase();
    root.walk()
        .filter(|region| region.long_name().to_lowercase().contains(&needle))
        .collect()
}

/// Region whose long name (or plain name) equals `name` ignoring case, falling
/// back to the first partial match.
pub fn find_by_name<'a>(root: &'a Region, name: &str) -> Option<&'a Region> {
    let matches = search(root, name);
    matches
        .iter()
        .find(|region| {
            region.long_name().eq_ignore_ascii_case(name) || region.name().eq_ignore_ascii_case(name)
        })
        .or_else(|| matches.first())
        .copied()
}

/// The `n` direct children with the most confirmed cases, largest first.
pub fn top(root: &Region, n: usize) -> Vec<&Region> {
    let mut children: Vec<&Region> = root.sub_regions().iter().collect();
    children.sort_by(|a, b| b.cmp_confirmed(a));
    children.truncate(n);
    children
}

/// Looks `region` up in `root` and then in each of its children, two levels deep.
pub fn lookup<'a>(root: &'a Region, region: &Region) -> Option<&'a Region> {
    root.find(region)
        .or_else(|| root.sub_regions().iter().find_map(|child| child.find(region)))
}
