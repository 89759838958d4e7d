//! Texts shown to the player.

pub const BANNER: &str = "AARDVARK: you answer, I guess\n\nThink of an animal\n";
pub const ANOTHER_ANIMAL: &str = "\n\nThink of another animal\n";
pub const KNEW_IT: &str = "I knew it!";
pub const GIVE_UP: &str = "\nI give up. Which animal were you thinking of?";

pub fn guess(animal: &str) -> String {
    format!("Are you thinking of a(n) {}", animal)
}

pub fn distinguish(wrong: &str, correct: &str) -> String {
    format!(
        "What question tells a(n) {} apart from a(n) {}?\n>",
        wrong, correct
    )
}

pub fn answer_for(correct: &str, question: &str) -> String {
    format!("For a(n) {}, what is the answer to \"{}\"", correct, question)
}
