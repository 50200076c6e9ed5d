//! Relationship resolution over a [`FamilyTree`].
//!
//! Every query is a pure function of the tree: the resolver only borrows it.
//! Parent and partner links are names, so each hop goes back through the
//! tree's name index. A hop that does not resolve degrades to an empty
//! result; only an unknown subject or an unsupported relationship token is
//! reported as a distinct message.

use tracing::debug;

use crate::message::ResultMessage;
use crate::person::Gender;
use crate::relationship::{Parent, Relationship};
use crate::tree::{FamilyTree, Member};

/// Computes relatives for members of a borrowed tree.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipResolver<'a> {
    tree: &'a FamilyTree,
}

impl<'a> RelationshipResolver<'a> {
    /// Creates a resolver over `tree`.
    #[must_use]
    pub const fn new(tree: &'a FamilyTree) -> Self {
        Self { tree }
    }

    /// Resolves a relationship given as a command-stream token.
    ///
    /// The subject is looked up first, so an unknown person is reported as
    /// [`ResultMessage::PersonNotFound`] even when the token is unsupported.
    #[must_use]
    pub fn resolve_token(&self, name: &str, token: &str) -> ResultMessage {
        if self.tree.find_member(name).is_none() {
            return ResultMessage::PersonNotFound;
        }
        match token.parse::<Relationship>() {
            Ok(kind) => self.resolve(name, kind),
            Err(err) => {
                debug!(%name, %err, "relationship not handled");
                ResultMessage::RelationshipNotHandled
            }
        }
    }

    /// Resolves `kind` for `name` into an output message.
    #[must_use]
    pub fn resolve(&self, name: &str, kind: Relationship) -> ResultMessage {
        match self.relatives(name, kind) {
            Some(names) => ResultMessage::from_names(names),
            None => ResultMessage::PersonNotFound,
        }
    }

    /// Returns the relative names, or `None` when `name` is not in the tree.
    #[must_use]
    pub fn relatives(&self, name: &str, kind: Relationship) -> Option<Vec<String>> {
        let person = self.tree.find_member(name)?;

        let relatives = match (kind, kind.target_gender()) {
            (Relationship::Siblings, _) | (_, None) => names_of(self.siblings(person, name)),
            (Relationship::Son | Relationship::Daughter, Some(gender)) => {
                names_of(self.children_by_gender(person, gender))
            }
            (Relationship::PaternalUncle | Relationship::PaternalAunt, Some(gender)) => {
                names_of(self.parent_siblings(person, Parent::Father, gender))
            }
            (Relationship::MaternalUncle | Relationship::MaternalAunt, Some(gender)) => {
                names_of(self.parent_siblings(person, Parent::Mother, gender))
            }
            (Relationship::SisterInLaw | Relationship::BrotherInLaw, Some(gender)) => {
                self.in_laws(person, gender)
            }
        };

        Some(relatives)
    }

    /// Checks that `mother_name` names a member able to take a child.
    ///
    /// On success returns the record that owns the children: the mother
    /// herself, or her husband's record when she married into the family.
    ///
    /// # Errors
    /// - [`ResultMessage::PersonNotFound`] if no member matches `mother_name`
    /// - [`ResultMessage::ChildAdditionFailed`] if the match is male, is a
    ///   husband alias, or has no partner on record
    pub fn find_mother(&self, mother_name: &str) -> Result<&'a Member, ResultMessage> {
        let Some(mother) = self.tree.find_member(mother_name) else {
            return Err(ResultMessage::PersonNotFound);
        };

        let is_self = mother.name == mother_name;
        if (is_self && mother.gender == Gender::Male)
            || mother.husband.as_deref() == Some(mother_name)
        {
            debug!(%mother_name, host = %mother.name, "not a mother");
            return Err(ResultMessage::ChildAdditionFailed);
        }

        let is_married_self = is_self && mother.husband.is_some();
        let is_wife = mother.spouse.as_deref() == Some(mother_name);
        if is_married_self || is_wife {
            Ok(mother)
        } else {
            debug!(%mother_name, "mother has no partner on record");
            Err(ResultMessage::ChildAdditionFailed)
        }
    }

    /// Children of whichever record `name` resolves to.
    fn children_of_named(&self, name: Option<&str>) -> Vec<&'a Member> {
        name.and_then(|name| self.tree.find_member(name))
            .map(|member| self.tree.children(member.id).collect())
            .unwrap_or_default()
    }

    fn children_by_gender(&self, person: &Member, gender: Gender) -> Vec<&'a Member> {
        self.tree
            .children(person.id)
            .filter(|child| child.gender == gender)
            .collect()
    }

    /// The mother's children minus `name`, provided `name` is one of them.
    ///
    /// A name that only matched a partner alias is not among the mother's
    /// children and so has no siblings.
    fn siblings(&self, person: &Member, name: &str) -> Vec<&'a Member> {
        let children = self.children_of_named(person.mother.as_deref());
        if !children.iter().any(|child| child.name == name) {
            return Vec::new();
        }
        children.into_iter().filter(|child| child.name != name).collect()
    }

    /// Uncles or aunts on one side: the parent's siblings of `gender`.
    fn parent_siblings(&self, person: &Member, parent: Parent, gender: Gender) -> Vec<&'a Member> {
        let Some(parent_name) = person.parent_link(parent) else {
            return Vec::new();
        };
        let Some(parent_record) = self.tree.find_member(parent_name) else {
            return Vec::new();
        };
        // A married-in parent has no blood siblings in this tree.
        if parent_record.is_partner(parent_name) {
            return Vec::new();
        }

        self.children_of_named(parent_record.parent_link(parent))
            .into_iter()
            .filter(|sibling| sibling.name != parent_name && sibling.gender == gender)
            .collect()
    }

    /// Sisters-in-law (`gender == Female`) or brothers-in-law (`Male`).
    ///
    /// Two groups are merged, in order: the host's siblings of `gender`, then
    /// the partners held by the host's siblings of the other gender. The
    /// host is the record the name resolved to, so a married-in subject sees
    /// their partner's family. The subject's spouse's own siblings are not
    /// part of the tree and are not included.
    fn in_laws(&self, person: &Member, gender: Gender) -> Vec<String> {
        let siblings: Vec<&Member> = self
            .children_of_named(person.mother.as_deref())
            .into_iter()
            .filter(|sibling| sibling.name != person.name)
            .collect();

        let same_gender = siblings
            .iter()
            .filter(|sibling| sibling.gender == gender)
            .map(|sibling| sibling.name.clone());
        let partners = siblings
            .iter()
            .filter(|sibling| sibling.gender == gender.opposite())
            .filter_map(|sibling| sibling.partner_of_gender(gender))
            .map(str::to_string);

        same_gender.chain(partners).collect()
    }
}

fn names_of<'m>(members: impl IntoIterator<Item = &'m Member>) -> Vec<String> {
    members.into_iter().map(|member| member.name.clone()).collect()
}
