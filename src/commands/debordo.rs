use super::{CommandDescriptor, OptionKind};

pub const NAME: &str = "debordo";

/// Build the `/debordo` command
/// Defaults mentioned in the descriptions are applied by the bot when an option is omitted
pub fn command() -> CommandDescriptor {
    CommandDescriptor::new(
        NAME,
        "Calcule la probabilité de débordement en fonction des paramètres de simulation",
    )
    .option(
        "defense_min",
        "Valeur minimale de la défense à tester",
        OptionKind::Integer,
        true,
    )
    .option(
        "defense_max",
        "Valeur maximale de la défense à tester",
        OptionKind::Integer,
        true,
    )
    .option("tdg_min", "TDG minimum de l'attaquant", OptionKind::Integer, true)
    .option("tdg_max", "TDG maximum de l'attaquant", OptionKind::Integer, true)
    .option("min_def", "Défense minimale des cibles", OptionKind::Integer, true)
    .option("nb_drapo", "Nombre de drapeaux", OptionKind::Integer, true)
    .option(
        "day",
        "Jour de la simulation (défaut: 1)",
        OptionKind::Integer,
        false,
    )
    .option(
        "iterations",
        "Nombre d'itérations Monte Carlo (défaut: 10000)",
        OptionKind::Integer,
        false,
    )
    .option(
        "points",
        "Nombre de points de défense à calculer (défaut: 10)",
        OptionKind::Integer,
        false,
    )
    .option(
        "reactor",
        "Le réacteur est-il construit? (défaut: false)",
        OptionKind::Boolean,
        false,
    )
}
