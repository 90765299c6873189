//! Cookie recipe optimizer: distribute a teaspoon budget over ingredients
//! to maximize the product of the clamped property sums. The recursion
//! explores every distribution; fine for puzzle-sized pantries (N <= ~20
//! ingredients would already be far beyond any real input).

use regex::Regex;
use std::iter::zip;

#[derive(Debug)]
pub struct Ingredient {
    pub name: String,
    pub capacity: i64,
    pub durability: i64,
    pub flavor: i64,
    pub texture: i64,
    pub calories: i64,
}

pub const TEASPOONS: i64 = 100;
pub const CALORIE_TARGET: i64 = 500;

pub fn parse(input: &str) -> Vec<Ingredient> {
    let re = Regex::new(
        r"(\w+):\s+capacity\s+(-?\d+),\s+durability\s+(-?\d+),\s+flavor\s+(-?\d+),\s+texture\s+(-?\d+),\s+calories\s+(-?\d+)"
    ).unwrap();
    re.captures_iter(input).map(|caps| Ingredient {
        name: caps[1].to_owned(),
        capacity: caps[2].parse().expect(&caps[0]),
        durability: caps[3].parse().expect(&caps[0]),
        flavor: caps[4].parse().expect(&caps[0]),
        texture: caps[5].parse().expect(&caps[0]),
        calories: caps[6].parse().expect(&caps[0]),
    }).collect()
}

fn mix_score(ingredients: &[Ingredient], amounts: &[i64], calorie_target: Option<i64>) -> i64 {
    if let Some(target) = calorie_target {
        let calories: i64 = zip(ingredients, amounts).map(|(ing, &amt)| ing.calories * amt).sum();
        if calories != target {return 0}
    }
    let totals = zip(ingredients, amounts).fold([0i64; 4], |mut totals, (ing, &amt)| {
        totals[0] += ing.capacity * amt;
        totals[1] += ing.durability * amt;
        totals[2] += ing.flavor * amt;
        totals[3] += ing.texture * amt;
        totals
    });
    totals.iter().map(|&t| t.max(0)).product()
}

fn distribute(
    ingredients: &[Ingredient],
    amounts: &mut Vec<i64>,
    remaining: i64,
    calorie_target: Option<i64>,
    best: &mut i64,
) {
    if amounts.len() == ingredients.len() - 1 {
        // last ingredient takes the remainder, so every branch sums exactly
        amounts.push(remaining);
        *best = (*best).max(mix_score(ingredients, amounts, calorie_target));
        amounts.pop();
        return;
    }
    for amount in 0..=remaining {
        amounts.push(amount);
        distribute(ingredients, amounts, remaining - amount, calorie_target, best);
        amounts.pop();
    }
}

pub fn best_score(ingredients: &[Ingredient], teaspoons: i64, calorie_target: Option<i64>) -> i64 {
    if ingredients.is_empty() {return 0}
    let mut best = 0;
    distribute(ingredients, &mut Vec::with_capacity(ingredients.len()), teaspoons, calorie_target, &mut best);
    best
}

pub fn solve(part: u8, input: &str) -> String {
    let ingredients = parse(input);
    let calorie_target = if part == 1 {None} else {Some(CALORIE_TARGET)};
    best_score(&ingredients, TEASPOONS, calorie_target).to_string()
}
