/// 固定的提示元素對照表，鍵與描述皆為字面常數
pub const TECHNIQUES: [(&str, &str); 4] = [
    (
        "Contexto detalhado com informacoes importantes",
        "Apresenta o cenario, o usuario e limites para a tarefa",
    ),
    (
        "Objetivo especifico descrevendo o resultado esperado",
        "Define com clareza o que a resposta final deve entregar",
    ),
    (
        "Exemplos no prompt para mostrar o formato da resposta",
        "Mostra modelos de entrada e saida como referencia",
    ),
    (
        "Formato de saida definindo lista tabela ou passos",
        "Explica como a resposta deve ser estruturada pela IA",
    ),
];

/// 查無對應鍵時回傳的預設描述
pub const FALLBACK: &str = "Tecnica desconhecida";

/// 逐位元組精確比對；呼叫端負責先去除前後空白
pub fn lookup(element: &str) -> Option<&'static str> {
    TECHNIQUES
        .iter()
        .find(|(key, _)| *key == element)
        .map(|(_, description)| *description)
}

pub fn describe(element: &str) -> &'static str {
    lookup(element).unwrap_or(FALLBACK)
}
