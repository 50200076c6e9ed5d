//! Arena-backed family tree.
//!
//! The nested [`Person`] records are flattened into a `Vec<Member>` addressed
//! by [`PersonId`]. Children stay ordered per member, and a name index built
//! at load time (and extended on every insertion) replaces the repeated
//! depth-first walks a name-linked tree would otherwise need.
//!
//! Lookup semantics match a pre-order search over the nested records: a name
//! matches a member's own `name`, and by default also its `spouse` and
//! `husband` fields, so a married-in partner resolves to the *host* record.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::person::{Gender, Person, PersonId};
use crate::relationship::Parent;

/// Identity fields a lookup may match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKey {
    /// The member's own name
    Name,
    /// The wife's name held by a male member
    Spouse,
    /// The husband's name held by a female member
    Husband,
}

impl MatchKey {
    /// Default lookup keys: own name plus both partner aliases.
    pub const ALL: [Self; 3] = [Self::Name, Self::Husband, Self::Spouse];
}

/// A member node stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub mother: Option<String>,
    pub father: Option<String>,
    pub spouse: Option<String>,
    pub husband: Option<String>,
    /// Structural owner (the record this member is nested under).
    pub parent: Option<PersonId>,
    pub children: Vec<PersonId>,
}

impl Member {
    /// Returns the value of an identity field.
    #[must_use]
    pub fn key(&self, key: MatchKey) -> Option<&str> {
        match key {
            MatchKey::Name => Some(&self.name),
            MatchKey::Spouse => self.spouse.as_deref(),
            MatchKey::Husband => self.husband.as_deref(),
        }
    }

    /// Returns the mother or father link.
    #[must_use]
    pub fn parent_link(&self, parent: Parent) -> Option<&str> {
        match parent {
            Parent::Mother => self.mother.as_deref(),
            Parent::Father => self.father.as_deref(),
        }
    }

    /// Returns the partner name stored for a partner of the given gender.
    ///
    /// A wife is held in `spouse`, a husband in `husband`.
    #[must_use]
    pub fn partner_of_gender(&self, gender: Gender) -> Option<&str> {
        match gender {
            Gender::Female => self.spouse.as_deref(),
            Gender::Male => self.husband.as_deref(),
        }
    }

    /// Returns true if `name` is this member's married-in partner.
    #[must_use]
    pub fn is_partner(&self, name: &str) -> bool {
        self.spouse.as_deref() == Some(name) || self.husband.as_deref() == Some(name)
    }
}

/// Result of a lookup: the member plus the field that matched.
#[derive(Debug, Clone, Copy)]
pub struct MemberMatch<'a> {
    pub member: &'a Member,
    pub key: MatchKey,
}

/// Accepted shapes of a tree document.
#[derive(Deserialize)]
#[serde(untagged)]
enum TreeDocument {
    Roots(Vec<Person>),
    Wrapped { children: Vec<Person> },
}

/// The family forest.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    members: Vec<Member>,
    roots: Vec<PersonId>,
    /// Identity value -> registrations, in registration order.
    index: HashMap<String, Vec<(PersonId, MatchKey)>>,
}

impl FamilyTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from root records, registering members in pre-order.
    #[must_use]
    pub fn from_people(roots: Vec<Person>) -> Self {
        let mut tree = Self::new();
        for person in roots {
            let id = tree.register(person, None);
            tree.roots.push(id);
        }
        tree
    }

    /// Parses a JSON tree document.
    ///
    /// Accepts either an array of root records or an object whose `children`
    /// field holds the roots.
    pub fn from_json_str(json: &str) -> Result<Self, StorageError> {
        let roots = match serde_json::from_str::<TreeDocument>(json)? {
            TreeDocument::Roots(roots) | TreeDocument::Wrapped { children: roots } => roots,
        };
        let tree = Self::from_people(roots);
        info!(members = tree.len(), roots = tree.roots.len(), "family tree loaded");
        Ok(tree)
    }

    /// Reads and parses a JSON tree document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading family tree");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn register(&mut self, person: Person, parent: Option<PersonId>) -> PersonId {
        let id = PersonId::new(self.members.len());
        let Person {
            name,
            gender,
            mother,
            father,
            spouse,
            husband,
            children,
        } = person;

        self.members.push(Member {
            id,
            name,
            gender,
            mother,
            father,
            spouse,
            husband,
            parent,
            children: Vec::with_capacity(children.len()),
        });
        self.index_member(id);

        for child in children {
            let child_id = self.register(child, Some(id));
            self.members[id.index()].children.push(child_id);
        }
        id
    }

    fn index_member(&mut self, id: PersonId) {
        let member = &self.members[id.index()];
        let entries: Vec<(String, MatchKey)> = MatchKey::ALL
            .into_iter()
            .filter_map(|key| member.key(key).map(|value| (value.to_string(), key)))
            .collect();
        for (value, key) in entries {
            self.index.entry(value).or_default().push((id, key));
        }
    }

    /// Number of members (married-in partners without a record are not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the tree has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Root members, in load order.
    #[must_use]
    pub fn roots(&self) -> &[PersonId] {
        &self.roots
    }

    /// Returns a member by id.
    #[must_use]
    pub fn get(&self, id: PersonId) -> Option<&Member> {
        self.members.get(id.index())
    }

    /// Iterates all members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Iterates a member's children in order. Unknown ids yield nothing.
    pub fn children(&self, id: PersonId) -> impl Iterator<Item = &Member> {
        self.get(id)
            .map(|m| m.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |child| self.get(*child))
    }

    /// Finds a member by name or partner alias.
    #[must_use]
    pub fn find_member(&self, name: &str) -> Option<&Member> {
        self.find_member_by(name, &MatchKey::ALL).map(|found| found.member)
    }

    /// Finds the first member whose listed identity fields equal `name`.
    #[must_use]
    pub fn find_member_by(&self, name: &str, keys: &[MatchKey]) -> Option<MemberMatch<'_>> {
        self.index
            .get(name)?
            .iter()
            .find(|(_, key)| keys.contains(key))
            .and_then(|&(id, key)| self.get(id).map(|member| MemberMatch { member, key }))
    }

    /// Appends `child` (and any nested records) under `host`.
    ///
    /// Returns `None` without touching the tree when `host` is not a member.
    pub fn insert_child(&mut self, host: PersonId, child: Person) -> Option<PersonId> {
        self.get(host)?;
        let id = self.register(child, Some(host));
        self.members[host.index()].children.push(id);
        Some(id)
    }

    /// Exports one member and its descendants as a nested record.
    #[must_use]
    pub fn to_person(&self, id: PersonId) -> Option<Person> {
        let member = self.get(id)?;
        Some(Person {
            name: member.name.clone(),
            gender: member.gender,
            mother: member.mother.clone(),
            father: member.father.clone(),
            spouse: member.spouse.clone(),
            husband: member.husband.clone(),
            children: member
                .children
                .iter()
                .filter_map(|child| self.to_person(*child))
                .collect(),
        })
    }

    /// Exports the whole forest as nested records.
    #[must_use]
    pub fn to_people(&self) -> Vec<Person> {
        self.roots.iter().filter_map(|id| self.to_person(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FamilyTree {
        FamilyTree::from_people(vec![Person::new("Margaret", Gender::Female)
            .with_husband("Arthur")
            .with_child(
                Person::new("Bill", Gender::Male)
                    .with_mother("Margaret")
                    .with_father("Arthur")
                    .with_spouse("Flora")
                    .with_child(Person::new("Victoire", Gender::Female).with_mother("Flora")),
            )
            .with_child(
                Person::new("Ginny", Gender::Female)
                    .with_mother("Margaret")
                    .with_father("Arthur")
                    .with_husband("Harry"),
            )])
    }

    #[test]
    fn test_from_people_registers_preorder() {
        let tree = sample();
        let names: Vec<&str> = tree.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Margaret", "Bill", "Victoire", "Ginny"]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_children_keep_order_and_parent() {
        let tree = sample();
        let root = tree.roots()[0];
        let children: Vec<&str> = tree.children(root).map(|m| m.name.as_str()).collect();
        assert_eq!(children, vec!["Bill", "Ginny"]);
        let bill = tree.find_member("Bill").unwrap();
        assert_eq!(bill.parent, Some(root));
    }

    #[test]
    fn test_find_member_by_partner_alias_returns_host() {
        let tree = sample();
        let found = tree.find_member_by("Flora", &MatchKey::ALL).unwrap();
        assert_eq!(found.member.name, "Bill");
        assert_eq!(found.key, MatchKey::Spouse);

        let found = tree.find_member_by("Arthur", &MatchKey::ALL).unwrap();
        assert_eq!(found.member.name, "Margaret");
        assert_eq!(found.key, MatchKey::Husband);
    }

    #[test]
    fn test_find_member_restricted_keys() {
        let tree = sample();
        assert!(tree.find_member_by("Flora", &[MatchKey::Name]).is_none());
        assert!(tree.find_member_by("Ginny", &[MatchKey::Name]).is_some());
        assert!(tree.find_member("Nobody").is_none());
    }

    #[test]
    fn test_find_member_first_registered_wins() {
        let tree = FamilyTree::from_people(vec![
            Person::new("Ron", Gender::Male).with_spouse("Helen"),
            Person::new("Helen", Gender::Female),
        ]);
        let found = tree.find_member_by("Helen", &MatchKey::ALL).unwrap();
        assert_eq!(found.member.name, "Ron");
    }

    #[test]
    fn test_insert_child_appends_and_indexes() {
        let mut tree = sample();
        let bill = tree.find_member("Bill").unwrap().id;
        let id = tree
            .insert_child(bill, Person::new("Louis", Gender::Male).with_mother("Flora"))
            .unwrap();

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.find_member("Louis").unwrap().id, id);
        let children: Vec<&str> = tree.children(bill).map(|m| m.name.as_str()).collect();
        assert_eq!(children, vec!["Victoire", "Louis"]);
    }

    #[test]
    fn test_insert_child_unknown_host() {
        let mut tree = sample();
        let before = tree.to_people();
        assert!(tree
            .insert_child(PersonId::new(99), Person::new("Ghost", Gender::Male))
            .is_none());
        assert_eq!(tree.to_people(), before);
    }

    #[test]
    fn test_to_people_round_trips_structure() {
        let tree = sample();
        let people = tree.to_people();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].count(), 4);
        assert_eq!(FamilyTree::from_people(people).to_people(), tree.to_people());
    }

    #[test]
    fn test_from_json_wrapped_document() {
        let json = r#"{
            "children": [
                {"name": "Margaret", "gender": "Female", "mother": "", "husband": "Arthur",
                 "children": [{"name": "Bill", "gender": "Male", "mother": "Margaret"}]}
            ]
        }"#;
        let tree = FamilyTree::from_json_str(json).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find_member("Margaret").unwrap().mother, None);
    }

    #[test]
    fn test_from_json_root_array() {
        let json = r#"[{"name": "Margaret", "gender": "Female"}, {"name": "Percy", "gender": "Male"}]"#;
        let tree = FamilyTree::from_json_str(json).unwrap();
        assert_eq!(tree.roots().len(), 2);
    }

    #[test]
    fn test_from_json_rejects_bad_gender() {
        let json = r#"[{"name": "Margaret", "gender": "Unknown"}]"#;
        assert!(matches!(
            FamilyTree::from_json_str(json),
            Err(StorageError::Load(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FamilyTree::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
