//! Alias grouping: which part numbers share one schematic symbol.

use crate::part::PartDescriptor;

/// Parts that render to an identical symbol. The first member is the
/// canonical representative whose symbol is emitted; the rest are recorded
/// as alternate names on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasClass {
    members: Vec<PartDescriptor>,
}

impl AliasClass {
    fn new(representative: PartDescriptor) -> Self {
        AliasClass {
            members: vec![representative],
        }
    }

    pub fn representative(&self) -> &PartDescriptor {
        &self.members[0]
    }

    pub fn aliases(&self) -> &[PartDescriptor] {
        &self.members[1..]
    }

    pub fn members(&self) -> &[PartDescriptor] {
        &self.members
    }
}

/// Partition descriptors into symbol-equivalence classes.
///
/// Two parts are equivalent when their [`alias_key`](PartDescriptor::alias_key)
/// matches: same identity prefix and package, grade and carrier free to
/// differ. Each part joins the first existing class whose representative it
/// matches, otherwise it starts a new class. This greedy first-match pass is
/// only a true partition because key equality is transitive; it is not a
/// general equivalence closure. Class order is first-occurrence order,
/// member order is discovery order.
pub fn group_aliases(parts: Vec<PartDescriptor>) -> Vec<AliasClass> {
    let mut classes: Vec<AliasClass> = Vec::new();
    for part in parts {
        let key = part.alias_key();
        match classes
            .iter_mut()
            .find(|class| class.representative().alias_key() == key)
        {
            Some(class) => class.members.push(part),
            None => classes.push(AliasClass::new(part)),
        }
    }
    classes
}
