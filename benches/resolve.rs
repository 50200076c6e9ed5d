use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kinship::{FamilyTree, Gender, Person, Relationship, RelationshipResolver};

/// Builds `generations` levels under one couple, `width` children per couple.
/// Every child marries, so each level keeps growing.
fn generated_tree(generations: usize, width: usize) -> FamilyTree {
    fn grow(mut person: Person, depth: usize, width: usize, path: &str) -> Person {
        if depth == 0 {
            return person;
        }
        let (mother, father) = match person.gender {
            Gender::Female => (person.name.clone(), person.husband.clone()),
            Gender::Male => (person.spouse.clone().unwrap_or_default(), Some(person.name.clone())),
        };

        for i in 0..width {
            let name = format!("{path}{i}");
            let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
            let mut child = Person::new(name.clone(), gender).with_mother(mother.clone());
            child.father = father.clone();
            child = match gender {
                Gender::Male => child.with_spouse(format!("w{name}")),
                Gender::Female => child.with_husband(format!("h{name}")),
            };
            person.children.push(grow(child, depth - 1, width, &format!("{name}.")));
        }
        person
    }

    let root = Person::new("root", Gender::Female).with_husband("patriarch");
    FamilyTree::from_people(vec![grow(root, generations, width, "p")])
}

fn bench_resolve(c: &mut Criterion) {
    let tree = generated_tree(5, 4);
    let resolver = RelationshipResolver::new(&tree);
    let leaf = "p0.1.2.3.0";

    c.bench_function("resolve/siblings", |b| {
        b.iter(|| resolver.relatives(black_box(leaf), Relationship::Siblings));
    });

    c.bench_function("resolve/maternal_aunt", |b| {
        b.iter(|| resolver.relatives(black_box(leaf), Relationship::MaternalAunt));
    });

    c.bench_function("resolve/sister_in_law_alias", |b| {
        b.iter(|| resolver.relatives(black_box("wp0.1.2.3.0"), Relationship::SisterInLaw));
    });

    c.bench_function("resolve/all_kinds", |b| {
        b.iter(|| {
            for kind in Relationship::ALL {
                black_box(resolver.relatives(leaf, kind));
            }
        });
    });
}

fn bench_load(c: &mut Criterion) {
    let people = generated_tree(5, 4).to_people();
    c.bench_function("tree/from_people", |b| {
        b.iter(|| FamilyTree::from_people(black_box(people.clone())));
    });
}

criterion_group!(benches, bench_resolve, bench_load);
criterion_main!(benches);
