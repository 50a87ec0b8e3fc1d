/// Use cases module containing application business logic orchestration
mod build_bom;

pub use build_bom::BuildBomUseCase;
