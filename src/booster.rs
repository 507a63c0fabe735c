use rand::seq::SliceRandom;

pub const MESSAGES: &[&str] = &[
    "You're doing amazing, even if you don't see it yet 💪",
    "Drink some water, your brain will thank you 💧",
    "You're the main character today 🎬",
    "A dog once said: 'Woof... which means you're awesome' 🐶",
    "Your smile is literally a software update for my soul 😄",
    "You survived 100% of your bad days so far 💖",
    "Plot twist: you're actually doing great 😌",
];

pub fn cheer_up() -> &'static str {
    MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MESSAGES[0])
}
