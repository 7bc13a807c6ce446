//! User-facing text. Every function is pure: it only builds the line.

use crate::domain::model::{Combination, NumberList};
use crate::utils::error::Result;

pub const TARGET_PROMPT: &str = "Digite o valor que deseja encontrar (use vírgula para decimais): ";
pub const NUMBERS_PROMPT: &str =
    "Digite os números separados por ponto e vírgula (;), usando vírgula para decimais: ";
pub const CONTINUE_PROMPT: &str =
    "Pressione Enter para buscar outro valor ou digite 'sair' para encerrar.";

pub fn welcome() -> &'static str {
    "Bem-vindo ao programa de análise combinatória de números!"
}

pub fn farewell() -> &'static str {
    "Encerrando o programa. Até logo!"
}

pub fn invalid_target() -> &'static str {
    "Erro: O valor-alvo deve ser um número válido."
}

pub fn invalid_numbers() -> &'static str {
    "Erro: Todos os números fornecidos devem ser válidos."
}

pub fn numbers_received(numbers: &NumberList) -> String {
    format!("Números fornecidos: {}", numbers)
}

pub fn searching(target: f64) -> String {
    format!("Procurando combinações que somam aproximadamente {:?}...", target)
}

pub fn combination_found(combination: &Combination) -> String {
    format!("Combinação encontrada: {}", combination)
}

pub fn all_shown() -> &'static str {
    "Todas as combinações foram exibidas."
}

pub fn no_combination(target: f64) -> String {
    format!("Não foi encontrada nenhuma combinação que soma {:?}.", target)
}

/// One JSON object per line, for the one-shot `--format json` output.
pub fn combination_json(combination: &Combination) -> Result<String> {
    Ok(serde_json::to_string(combination)?)
}
