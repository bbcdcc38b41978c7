/// `mint` called by anyone but the owner.
pub const ERR_NOT_OWNER: &str = "MeuToken: Mensagem de erro";
pub const ERR_MINT_TO_ZERO: &str = "MeuToken: Can not mint to address zero";
pub const ERR_TRANSFER_TO_ZERO: &str = "MeuToken: Can not transfer to address zero";
/// `transfer` above the sender's balance. Checked before the allowance.
pub const ERR_INSUFFICIENT_BALANCE: &str = "MeuToken: Not enought balance";
/// `transfer` above what the sender approved for the recipient.
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "MeuToken: Not allowed to transfer this amount";
