use coffee_machine::model::{RECIPES, Supplies};
use coffee_machine::{Command, Inventory, Machine};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Generates a repeating service day for benchmarking.
///
/// Pattern (repeating):
/// 1. Buy each recipe in turn
/// 2. Restock every `restock_every` commands
/// 3. Collect the cash after each restock
///
/// Restocking keeps most purchases successful.
pub struct CommandGenerator {
    remaining: u32,
    restock_every: u32,
    step: u32,
}

impl CommandGenerator {
    pub fn new(count: u32, restock_every: u32) -> Self {
        Self {
            remaining: count,
            restock_every,
            step: 0,
        }
    }
}

impl Iterator for CommandGenerator {
    type Item = Command;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.step += 1;

        let command = if self.step % self.restock_every == 0 {
            Command::Fill(Supplies::new(2_000, 1_000, 200, 10))
        } else if self.step % self.restock_every == 1 && self.step > 1 {
            Command::Take
        } else {
            Command::Buy(&RECIPES[self.step as usize % RECIPES.len()])
        };
        Some(command)
    }
}

fn bench_sell_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("sell");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                // enough stock that every sale succeeds
                let plenty = u64::MAX / 2;
                let mut machine =
                    Machine::with_inventory(Inventory::new(plenty, plenty, plenty, plenty, 0));
                for i in 0..count {
                    let recipe = &RECIPES[i as usize % RECIPES.len()];
                    let _ = black_box(machine.sell(recipe));
                }
                machine
            });
        });
    }

    group.finish();
}

fn bench_service_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("service_day");

    for restock_every in [5u32, 20, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(restock_every),
            &restock_every,
            |b, &restock_every| {
                b.iter(|| {
                    let mut machine = Machine::new();
                    for command in CommandGenerator::new(100_000, restock_every) {
                        let _ = black_box(machine.apply(command));
                    }
                    machine
                });
            },
        );
    }

    group.finish();
}

fn bench_availability(c: &mut Criterion) {
    let machine = Machine::new();
    c.bench_function("can_prepare", |b| {
        b.iter(|| {
            for recipe in &RECIPES {
                let _ = black_box(machine.can_prepare(black_box(recipe)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_sell_only,
    bench_service_day,
    bench_availability
);

criterion_main!(benches);
