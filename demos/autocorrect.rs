use triage::correct::DamerauLevenshtein;
use triage::trie::Trie;

fn main() {
    // A small command vocabulary, weighted by how often each command is
    // typically used.
    let commands = [
        ("status", 900),
        ("stash", 300),
        ("stage", 120),
        ("push", 800),
        ("pull", 750),
        ("commit", 950),
        ("checkout", 600),
        ("branch", 400),
    ];

    let mut trie = Trie::new();
    for (command, weight) in commands {
        trie.insert_weighted(command, weight);
    }

    for typo in ["stsh", "comit", "checout", "pulll"] {
        println!("'{typo}' is not a command, did you mean:");
        match trie.suggest(typo, 2, 3, &DamerauLevenshtein) {
            Ok(suggestions) => {
                for (word, distance) in suggestions {
                    println!("  {word} (distance {distance})");
                }
            }
            Err(e) => println!("  suggestion failed: {e}"),
        }
    }
}
