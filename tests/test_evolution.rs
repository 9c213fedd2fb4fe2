use timetable_ga::{
    catalog::Catalog,
    chromosome::Chromosome,
    evolution::{Challenge, EvolutionLauncher, GeneticAlgorithm, GeneticAlgorithmOptions, Termination},
    rng::RandomNumberGenerator,
    timetable::{fitness_of, Timetable},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A small department: plenty of rooms and slots, so a clash-free timetable exists.
fn department_timetable() -> Timetable {
    let catalog = Catalog::builder()
        .add_room(1, "A1", 40)
        .add_room(2, "B1", 40)
        .add_room(3, "C1", 40)
        .add_timeslot(1, "Mon 09:00 - 11:00")
        .add_timeslot(2, "Mon 11:00 - 13:00")
        .add_timeslot(3, "Mon 13:00 - 15:00")
        .add_timeslot(4, "Tue 09:00 - 11:00")
        .add_timeslot(5, "Tue 11:00 - 13:00")
        .add_timeslot(6, "Tue 13:00 - 15:00")
        .add_timeslot(7, "Wed 09:00 - 11:00")
        .add_timeslot(8, "Wed 11:00 - 13:00")
        .add_professor(1, "Dr P Smith")
        .add_professor(2, "Mrs E Mitchell")
        .add_professor(3, "Dr R Williams")
        .add_professor(4, "Mr A Thompson")
        .add_module(1, "cs1", "Computer Science", 1, vec![1, 2])
        .add_module(2, "en1", "English", 1, vec![1, 3])
        .add_module(3, "ma1", "Maths", 1, vec![1, 2])
        .add_module(4, "ph1", "Physics", 1, vec![3, 4])
        .add_group(1, 20, vec![1, 2, 3])
        .add_group(2, 25, vec![1, 4])
        .build()
        .unwrap();
    Timetable::new(catalog).unwrap()
}

/// A denser faculty with multi-slot modules and rooms too small for some groups.
fn faculty_timetable() -> Timetable {
    let catalog = Catalog::builder()
        .add_room(1, "A1", 15)
        .add_room(2, "B1", 30)
        .add_room(4, "D1", 20)
        .add_room(5, "F1", 25)
        .add_timeslot(1, "Mon 09:00 - 10:00")
        .add_timeslot(2, "Mon 10:00 - 11:00")
        .add_timeslot(3, "Mon 11:00 - 12:00")
        .add_timeslot(4, "Mon 13:00 - 14:00")
        .add_timeslot(5, "Tue 09:00 - 10:00")
        .add_timeslot(6, "Tue 10:00 - 11:00")
        .add_timeslot(7, "Tue 11:00 - 12:00")
        .add_timeslot(8, "Tue 13:00 - 14:00")
        .add_timeslot(9, "Wed 09:00 - 10:00")
        .add_timeslot(10, "Wed 10:00 - 11:00")
        .add_professor(1, "Dr P Smith")
        .add_professor(2, "Mrs E Mitchell")
        .add_professor(3, "Dr R Williams")
        .add_professor(4, "Mr A Thompson")
        .add_module(1, "mob", "Mobile Development", 3, vec![1, 4])
        .add_module(2, "web", "Web Engineering", 2, vec![2, 3, 4])
        .add_module(3, "sec", "Security", 2, vec![3])
        .add_module(4, "net", "Networks", 1, vec![4, 1])
        .add_group(1, 10, vec![1, 2, 3])
        .add_group(2, 30, vec![2, 4])
        .add_group(3, 18, vec![1, 3, 4])
        .build()
        .unwrap();
    Timetable::new(catalog).unwrap()
}

fn algorithm(mutation_rate: f64, crossover_rate: f64, elitism_count: usize) -> GeneticAlgorithm {
    let options = GeneticAlgorithmOptions::builder()
        .population_size(30)
        .mutation_rate(mutation_rate)
        .crossover_rate(crossover_rate)
        .elitism_count(elitism_count)
        .tournament_size(5)
        .max_generations(1000)
        .build();
    GeneticAlgorithm::new(options).unwrap()
}

#[test]
fn test_fitness_range_and_perfect_iff_no_clash() {
    let timetable = faculty_timetable();
    let mut rng = RandomNumberGenerator::from_seed(10);

    for _ in 0..100 {
        let chromosome = Chromosome::random(&timetable, &mut rng);
        let clashes = timetable.clashes_of(&chromosome).unwrap();
        let fitness = timetable.score(&chromosome).unwrap();

        assert!(fitness > 0.0 && fitness <= 1.0);
        assert_eq!(fitness == 1.0, clashes == 0);
        assert_eq!(fitness, fitness_of(clashes));
    }
}

#[test]
fn test_decode_is_deterministic() {
    let timetable = faculty_timetable();
    let mut rng = RandomNumberGenerator::from_seed(11);
    let chromosome = Chromosome::random(&timetable, &mut rng);

    let first = timetable.decode(&chromosome).unwrap();
    let second = timetable.decode(&chromosome).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), timetable.catalog().class_count());
    for class in &first {
        let module = timetable.catalog().module(class.module_id()).unwrap();
        assert_eq!(class.timeslot_ids().len(), module.duration() as usize);
        assert!(module.professor_ids().contains(&class.professor_id()));
        assert!(timetable.catalog().room(class.room_id()).is_some());
        assert!(class
            .timeslot_ids()
            .iter()
            .all(|id| timetable.catalog().timeslot(*id).is_some()));
    }
}

#[test]
fn test_population_size_is_invariant() {
    let timetable = faculty_timetable();
    let ga = algorithm(0.3, 0.9, 3);
    let mut rng = RandomNumberGenerator::from_seed(12);
    let mut population = ga.init_population(&timetable, &mut rng);
    ga.eval_population(&mut population, &timetable).unwrap();

    for _ in 0..20 {
        population = ga.crossover_population(&population, &mut rng).unwrap();
        assert_eq!(population.len(), 30);
        population = ga.mutate_population(&population, &timetable, &mut rng).unwrap();
        assert_eq!(population.len(), 30);
        ga.eval_population(&mut population, &timetable).unwrap();
        assert!(population
            .iter()
            .all(|c| c.block_count() == timetable.class_count()));
    }
}

#[test]
fn test_elite_survives_a_generation_unchanged() {
    let timetable = faculty_timetable();
    let ga = algorithm(0.5, 1.0, 4);
    let mut rng = RandomNumberGenerator::from_seed(13);
    let mut population = ga.init_population(&timetable, &mut rng);
    ga.eval_population(&mut population, &timetable).unwrap();
    let elite: Vec<Chromosome> = population.chromosomes()[..4].to_vec();

    let crossed = ga.crossover_population(&population, &mut rng).unwrap();
    let mutated = ga.mutate_population(&crossed, &timetable, &mut rng).unwrap();

    for (survivor, original) in mutated.chromosomes()[..4].iter().zip(&elite) {
        assert_eq!(survivor.genes(), original.genes());
        assert_eq!(survivor.fitness(), original.fitness());
    }
}

#[test]
fn test_best_fitness_never_decreases() {
    let timetable = faculty_timetable();
    let launcher = EvolutionLauncher::new(algorithm(0.05, 0.9, 2), timetable);
    let mut rng = RandomNumberGenerator::from_seed(14);
    let mut best = Vec::new();

    launcher
        .evolve_with(&mut rng, |report| {
            assert!(report.average_fitness <= report.best_fitness);
            assert_eq!(report.fittest.fitness(), Some(report.best_fitness));
            best.push(report.best_fitness);
        })
        .unwrap();

    assert!(best.windows(2).all(|pair| pair[1] >= pair[0]));
}

#[test]
fn test_solves_department_timetable() {
    init_tracing();
    let launcher = EvolutionLauncher::new(algorithm(0.01, 0.9, 2), department_timetable());
    let mut rng = RandomNumberGenerator::from_seed(15);

    let result = launcher.evolve(&mut rng).unwrap();

    assert_eq!(result.termination, Termination::PerfectSolutionFound);
    assert_eq!(result.fitness, 1.0);
    assert_eq!(result.clashes, 0);
    assert_eq!(result.classes.len(), 5);
    assert!(result.generations <= 1000);
}

#[test]
fn test_result_is_consistent_with_decode() {
    init_tracing();
    let timetable = faculty_timetable();
    let launcher = EvolutionLauncher::new(algorithm(0.05, 0.9, 2), timetable.clone());
    let mut rng = RandomNumberGenerator::from_seed(16);

    let result = launcher.evolve(&mut rng).unwrap();

    assert_eq!(result.classes, timetable.decode(&result.fittest).unwrap());
    assert_eq!(result.clashes, timetable.count_clashes(&result.classes).unwrap());
    assert_eq!(result.fitness, fitness_of(result.clashes));
    match result.termination {
        Termination::PerfectSolutionFound => assert_eq!(result.clashes, 0),
        Termination::MaxGenerationsReached => assert_eq!(result.generations, 1000),
    }
}

#[test]
fn test_same_seed_same_run() {
    let run = |seed| {
        let launcher = EvolutionLauncher::new(algorithm(0.05, 0.9, 2), faculty_timetable());
        let mut rng = RandomNumberGenerator::from_seed(seed);
        launcher.evolve(&mut rng).unwrap()
    };

    let first = run(17);
    let second = run(17);

    assert_eq!(first.fittest, second.fittest);
    assert_eq!(first.generations, second.generations);
}

#[cfg(feature = "serde")]
#[test]
fn test_classes_serialize() {
    let timetable = department_timetable();
    let mut rng = RandomNumberGenerator::from_seed(18);
    let chromosome = Chromosome::random(&timetable, &mut rng);
    let classes = timetable.decode(&chromosome).unwrap();

    let json = serde_json::to_string(&classes).unwrap();
    let restored: Vec<timetable_ga::timetable::Class> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, classes);
}
